/// At most one outstanding request per panel.
///
/// Each AI panel owns its own guard; the trigger is rendered disabled while
/// `is_loading` holds and `begin` refuses a second start in the meantime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flight {
    loading: bool,
}

impl Flight {
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Called on success and on failure alike.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_until_finish() {
        let mut flight = Flight::default();
        assert!(flight.begin());
        assert!(flight.is_loading());
        assert!(!flight.begin());

        flight.finish();
        assert!(!flight.is_loading());
        assert!(flight.begin());
    }

    #[test]
    fn panels_do_not_share_a_guard() {
        let mut chat = Flight::default();
        let mut images = Flight::default();
        assert!(chat.begin());
        assert!(images.begin());
    }
}
