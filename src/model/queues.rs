// src/model/queues.rs

use crate::model::customer::Customer;
use std::collections::VecDeque;

/// FIFO line of customers. Only the front customer is ever mutated.
#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    buffer: VecDeque<Customer>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
        }
    }

    /// A new customer joins the tail of the line.
    pub fn enqueue(&mut self, customer: Customer) {
        self.buffer.push_back(customer);
    }

    /// The customer currently at the counter, if any.
    pub fn peek_front(&mut self) -> Option<&mut Customer> {
        self.buffer.front_mut()
    }

    /// Removes the front customer. Does nothing on an empty line.
    pub fn dequeue_front(&mut self) -> Option<Customer> {
        self.buffer.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    // Front to back, for inspection
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.buffer.iter()
    }
}
