use serde::Serialize;

use crate::data::link::{LinkId, LinkRecord};

/// The links that pass the current selection, in catalog order. This is what
/// the filter hands to whatever renders the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct VisibleRecords<'c> {
    links: Vec<&'c LinkRecord>,
}

/// Whether there is anything to render. There is no loading state: a view's
/// records are always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Empty,
    Populated { count: usize },
}

impl<'c> VisibleRecords<'c> {
    pub(crate) fn new(links: Vec<&'c LinkRecord>) -> Self {
        Self { links }
    }

    pub fn as_slice(&self) -> &[&'c LinkRecord] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = &'c LinkRecord> + '_ {
        self.links.iter().copied()
    }

    /// Pairs every link with its position in the visible sequence, which is
    /// what staggered rendering keys on.
    pub fn iter_positioned(&self) -> impl Iterator<Item = (usize, &'c LinkRecord)> + '_ {
        self.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn state(&self) -> ViewState {
        match self.links.len() {
            0 => ViewState::Empty,
            count => ViewState::Populated { count },
        }
    }

    pub fn get(&self, id: LinkId) -> Option<&'c LinkRecord> {
        self.iter().find(|link| link.id == id)
    }

    pub fn contains(&self, id: LinkId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<LinkId> {
        self.iter().map(|link| link.id).collect()
    }
}

impl<'a, 'c> IntoIterator for &'a VisibleRecords<'c> {
    type Item = &'c LinkRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, &'c LinkRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn link(id: u32) -> LinkRecord {
        LinkRecord {
            id: LinkId(id),
            title: format!("Link {id}"),
            url: format!("https://example.com/{id}"),
            description: String::new(),
            category: "Tools".to_owned(),
            tags: vec!["x".to_owned()],
        }
    }

    #[test]
    fn empty_state() {
        let visible = VisibleRecords::default();
        assert!(visible.is_empty());
        assert_eq!(visible.state(), ViewState::Empty);
        assert_eq!(visible.ids(), Vec::new());
    }

    #[test]
    fn populated_state_and_positions() {
        let (a, b) = (link(8), link(2));
        let visible = VisibleRecords::new(vec![&a, &b]);
        assert_eq!(visible.state(), ViewState::Populated { count: 2 });
        let positions: Vec<_> = visible.iter_positioned().map(|(pos, link)| (pos, link.id)).collect();
        assert_eq!(positions, vec![(0, LinkId(8)), (1, LinkId(2))]);
        assert!(visible.contains(LinkId(2)));
        assert!(!visible.contains(LinkId(3)));

        let mut ids = Vec::new();
        for link in &visible {
            ids.push(link.id);
        }
        assert_eq!(ids, visible.ids());
    }

    #[test]
    fn serializes_as_list_of_links() {
        let a = link(1);
        let visible = VisibleRecords::new(vec![&a]);
        let json = serde_json::to_value(&visible).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 1,
                "title": "Link 1",
                "url": "https://example.com/1",
                "description": "",
                "category": "Tools",
                "tags": ["x"],
            }])
        );
    }
}
