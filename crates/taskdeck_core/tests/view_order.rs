use taskdeck_core::{ArrivalQueue, PriorityView, RecencyStack};

#[test]
fn stack_pops_in_reverse_push_order() {
    let mut stack = RecencyStack::new();
    for id in [1, 2, 3] {
        stack.push(id);
    }

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

#[test]
fn stack_peek_does_not_remove() {
    let mut stack = RecencyStack::new();
    stack.push(10);
    stack.push(11);

    assert_eq!(stack.peek(), Some(11));
    assert_eq!(stack.len(), 2);
}

#[test]
fn queue_dequeues_in_push_order() {
    let mut queue = ArrivalQueue::new();
    for id in [1, 2, 3] {
        queue.enqueue(id);
    }

    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn queue_front_does_not_remove() {
    let mut queue = ArrivalQueue::new();
    queue.enqueue(4);
    queue.enqueue(5);

    assert_eq!(queue.front(), Some(4));
    assert_eq!(queue.len(), 2);
}

#[test]
fn priority_view_dequeues_non_decreasing_rank() {
    let mut view = PriorityView::new();
    view.enqueue(1, 3);
    view.enqueue(2, 1);
    view.enqueue(3, 2);
    view.enqueue(4, 1);

    let order: Vec<u64> = std::iter::from_fn(|| view.dequeue()).collect();
    assert_eq!(order, vec![2, 4, 3, 1]);
}

#[test]
fn priority_view_keeps_insertion_order_within_equal_rank() {
    let mut view = PriorityView::new();
    for id in [10, 11, 12] {
        view.enqueue(id, 2);
    }

    assert_eq!(view.dequeue(), Some(10));
    assert_eq!(view.dequeue(), Some(11));
    assert_eq!(view.dequeue(), Some(12));
}

#[test]
fn remove_purges_from_any_position() {
    let mut stack = RecencyStack::new();
    let mut queue = ArrivalQueue::new();
    let mut view = PriorityView::new();
    for id in [1, 2, 3] {
        stack.push(id);
        queue.enqueue(id);
        view.enqueue(id, 2);
    }

    assert!(stack.remove(2));
    assert!(queue.remove(2));
    assert!(view.remove(2));

    assert!(!stack.contains(2));
    assert!(!queue.contains(2));
    assert!(!view.contains(2));

    assert_eq!(stack.iter().collect::<Vec<_>>(), vec![3, 1]);
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 3]);

    assert!(!stack.remove(2), "second remove must report absence");
}

#[test]
fn empty_views_report_empty_and_return_none() {
    let mut stack = RecencyStack::new();
    let mut queue = ArrivalQueue::new();
    let mut view = PriorityView::new();

    assert!(stack.is_empty());
    assert!(queue.is_empty());
    assert!(view.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(queue.dequeue(), None);
    assert_eq!(view.dequeue(), None);
    assert_eq!(view.peek(), None);
}
