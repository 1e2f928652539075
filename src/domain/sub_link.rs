#[derive(Debug, Clone, PartialEq)]
pub struct SubLinkEntry {
    pub parent: String,
    pub links: Vec<String>,
}

/// Sub-links found under each parent page, parents kept in discovery order
#[derive(Debug, Default)]
pub struct SubLinkIndex {
    entries: Vec<SubLinkEntry>,
}

impl SubLinkIndex {
    pub fn push(&mut self, parent: String, links: Vec<String>) {
        self.entries.push(SubLinkEntry { parent, links });
    }

    pub fn entries(&self) -> &[SubLinkEntry] {
        &self.entries
    }

    pub fn all_links(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().flat_map(|e| e.links.iter())
    }

    pub fn link_count(&self) -> usize {
        self.entries.iter().map(|e| e.links.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::SubLinkIndex;

    #[test]
    fn all_links_follow_parent_order() {
        let mut index = SubLinkIndex::default();
        index.push("https://a.test/".into(), vec!["https://a.test/1".into()]);
        index.push("https://b.test/".into(), vec![]);
        index.push(
            "https://c.test/".into(),
            vec!["https://c.test/1".into(), "https://c.test/2".into()],
        );

        let links: Vec<&String> = index.all_links().collect();

        assert_eq!(
            links,
            vec!["https://a.test/1", "https://c.test/1", "https://c.test/2"]
        );
        assert_eq!(index.link_count(), 3);
        assert_eq!(index.entries().len(), 3);
        assert!(index.entries()[1].links.is_empty());
    }
}
