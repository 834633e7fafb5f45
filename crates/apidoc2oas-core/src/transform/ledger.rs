use std::collections::HashSet;

/// Operation identifiers already issued during one conversion run.
#[derive(Debug, Clone, Default)]
pub struct OperationIdLedger {
    issued: HashSet<String>,
}

impl OperationIdLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `candidate`, or the first free `candidate2`, `candidate3`, ...
    pub fn reserve(&mut self, candidate: &str) -> String {
        if self.issued.insert(candidate.to_string()) {
            return candidate.to_string();
        }
        let mut suffix: u64 = 2;
        loop {
            let probe = format!("{candidate}{suffix}");
            if self.issued.insert(probe.clone()) {
                return probe;
            }
            suffix += 1;
        }
    }

    pub fn clear(&mut self) {
        self.issued.clear();
    }
}
