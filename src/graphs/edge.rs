use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct WeightedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Weight,
}

impl WeightedEdge {
    /// Returns `None` for loops.
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> Option<WeightedEdge> {
        if tail == head {
            return None;
        }

        Some(WeightedEdge { tail, head, weight })
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn headless(&self) -> HeadlessEdge {
        HeadlessEdge {
            tail: self.tail,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaillessEdge {
    head: Vertex,
    weight: Weight,
}

impl TaillessEdge {
    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HeadlessEdge {
    tail: Vertex,
    weight: Weight,
}

impl HeadlessEdge {
    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}
