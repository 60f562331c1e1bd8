use std::cell::RefCell;
use std::collections::VecDeque;

// Cooperative task queue for reactions that cannot run while the connection
// or parser is mid-dispatch. Consumers defer work here; the injector flushes
// it right after synthetic header delivery.
#[derive(Default)]
pub struct TaskQueue {
    tasks: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    pub fn flush(&self) {
        // Tasks may defer further tasks; the borrow is dropped before each
        // one runs.
        loop {
            let task = self.tasks.borrow_mut().pop_front();
            match task {
                Some(task) => task(),
                None => return,
            }
        }
    }
}
