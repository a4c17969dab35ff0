/// Which endpoint of an input line a computation is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndRole {
    Begin,
    End,
}

impl EndRole {
    /// Returns the opposite endpoint role.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Begin => Self::End,
            Self::End => Self::Begin,
        }
    }
}

/// The welded vertex ids at both ends of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeEnds {
    pub begin: usize,
    pub end: usize,
}

impl EdgeEnds {
    /// Creates a new vertex pair.
    #[must_use]
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Returns the vertex id at the given role.
    #[must_use]
    pub fn vertex(&self, role: EndRole) -> usize {
        match role {
            EndRole::Begin => self.begin,
            EndRole::End => self.end,
        }
    }

    /// Returns the role at which this edge touches `vertex`, preferring
    /// `Begin` for self-loops, or `None` if the edge is not incident.
    #[must_use]
    pub fn role_of(&self, vertex: usize) -> Option<EndRole> {
        if self.begin == vertex {
            Some(EndRole::Begin)
        } else if self.end == vertex {
            Some(EndRole::End)
        } else {
            None
        }
    }

    /// Returns `true` if both ends welded to the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.begin == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_lookup() {
        let e = EdgeEnds::new(3, 7);
        assert_eq!(e.role_of(3), Some(EndRole::Begin));
        assert_eq!(e.role_of(7), Some(EndRole::End));
        assert_eq!(e.role_of(1), None);
        assert_eq!(e.vertex(EndRole::End.opposite()), 3);
    }
}
