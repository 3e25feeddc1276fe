use crate::stmt::Value;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a list of value records
    Values(Vec<Vec<Value>>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(values: Vec<Vec<Value>>) -> Self {
        Self {
            rows: Rows::Values(values),
        }
    }

    /// The single generated-key record of an insert with `returning`.
    pub fn generated_keys(self) -> Option<Vec<Value>> {
        match self.rows {
            Rows::Values(mut values) if values.len() == 1 => Some(values.remove(0)),
            _ => None,
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    #[track_caller]
    pub fn into_count(self) -> u64 {
        match self {
            Rows::Count(count) => count,
            Rows::Values(_) => panic!("expected count response"),
        }
    }

    #[track_caller]
    pub fn into_values(self) -> Vec<Vec<Value>> {
        match self {
            Rows::Values(values) => values,
            Rows::Count(_) => panic!("expected values response"),
        }
    }
}
