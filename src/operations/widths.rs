use crate::error::{InputError, TopologyError};
use crate::topology::EndRole;

/// Per-line widths at the begin and end vertex of every input line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidthLists {
    pub begin: Vec<f64>,
    pub end: Vec<f64>,
}

impl WidthLists {
    /// Creates width lists from caller-supplied values.
    #[must_use]
    pub fn new(begin: Vec<f64>, end: Vec<f64>) -> Self {
        Self { begin, end }
    }

    /// One width for every line at both ends.
    #[must_use]
    pub fn uniform(width: f64) -> Self {
        Self {
            begin: vec![width],
            end: vec![width],
        }
    }

    /// Pads both lists to `line_count` entries by repeating their last value.
    ///
    /// Lists that are already long enough are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyWidthList` if a list has no seed value.
    pub fn normalized(mut self, line_count: usize) -> Result<Self, InputError> {
        pad_to(&mut self.begin, line_count, "width_begin")?;
        pad_to(&mut self.end, line_count, "width_end")?;
        Ok(self)
    }

    /// Width of `edge` at the endpoint playing `role`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::MissingWidth` if the list was not normalized
    /// to cover `edge`.
    pub fn at(&self, edge: usize, role: EndRole) -> Result<f64, TopologyError> {
        let list = match role {
            EndRole::Begin => &self.begin,
            EndRole::End => &self.end,
        };
        list.get(edge).copied().ok_or(TopologyError::MissingWidth {
            edge,
            count: list.len(),
        })
    }
}

fn pad_to(list: &mut Vec<f64>, len: usize, name: &'static str) -> Result<(), InputError> {
    let Some(&last) = list.last() else {
        return Err(InputError::EmptyWidthList { list: name });
    };
    if list.len() < len {
        tracing::warn!(
            list = name,
            padded = len - list.len(),
            value = last,
            "width list shorter than line count, repeating last value"
        );
        list.resize(len, last);
    }
    Ok(())
}
