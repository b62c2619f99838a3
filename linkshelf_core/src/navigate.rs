use serde::Serialize;

use crate::data::link::LinkId;

/// Notification that the user picked a link from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSelected {
    pub id: LinkId,
    pub url: String,
}

/// Receives selection notifications. What happens next (opening the URL,
/// logging, nothing at all) is entirely up to the implementation; the filter
/// never observes a result.
pub trait Navigator {
    fn record_selected(&mut self, event: RecordSelected);
}

impl<F> Navigator for F
where
    F: FnMut(RecordSelected),
{
    fn record_selected(&mut self, event: RecordSelected) {
        self(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closures_are_navigators() {
        let mut opened = Vec::new();
        {
            let mut navigator = |event: RecordSelected| opened.push(event.url);
            navigator.record_selected(RecordSelected {
                id: LinkId(3),
                url: "https://github.com".to_owned(),
            });
        }
        assert_eq!(opened, vec!["https://github.com".to_owned()]);
    }
}
