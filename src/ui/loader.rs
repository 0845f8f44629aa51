use std::collections::HashSet;

/// Global busy indicator.
///
/// Calls nest: the overlay stays visible until every `show(true)` has been matched by a
/// `show(false)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Loader {
    depth: usize,
}

impl Loader {
    pub fn show(&mut self, visible: bool) {
        if visible {
            self.depth += 1;
        } else {
            self.depth = self.depth.saturating_sub(1);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.depth > 0
    }
}

/// Keys of the non-idempotent actions whose request is still running.
///
/// A key looks like `approve-offer:12`. While it is registered, a second submission of the
/// same action is rejected and its button renders disabled.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InFlight {
    keys: HashSet<String>,
}

impl InFlight {
    /// Registers `key`. Returns `false` if the same action is already running.
    pub fn try_begin(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn finish(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_nests() {
        let mut loader = Loader::default();

        loader.show(true);
        loader.show(true);
        loader.show(false);
        assert!(loader.is_visible());

        loader.show(false);
        assert!(!loader.is_visible());

        loader.show(false);
        assert!(!loader.is_visible());
    }

    #[test]
    fn second_submission_of_the_same_action_is_rejected() {
        let mut in_flight = InFlight::default();

        assert!(in_flight.try_begin("approve-offer:3"));
        assert!(!in_flight.try_begin("approve-offer:3"));
        assert!(in_flight.try_begin("approve-offer:4"));

        in_flight.finish("approve-offer:3");
        assert!(!in_flight.is_pending("approve-offer:3"));
        assert!(in_flight.try_begin("approve-offer:3"));
    }
}
