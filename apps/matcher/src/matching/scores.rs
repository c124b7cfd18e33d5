/// Career name → score, kept in first-insertion order.
///
/// Re-inserting an existing name overwrites its value in place, so the name
/// keeps its original position. Ties in `top_k` resolve by this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    entries: Vec<(String, f64)>,
}

/// One ranked career: name and the raw score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCareer {
    pub name: String,
    pub score: f64,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value when `name` was already present.
    pub fn insert(&mut self, name: impl Into<String>, score: f64) -> Option<f64> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, score)),
            None => {
                self.entries.push((name, score));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, s)| *s)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut map = ScoreMap::new();
        for (name, score) in iter {
            map.insert(name, score);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let map: ScoreMap = [("b", 1.0), ("a", 2.0), ("c", 3.0)].into_iter().collect();
        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_overwrite_in_place() {
        let mut map = ScoreMap::new();
        map.insert("a", 1.0);
        map.insert("b", 2.0);
        assert_eq!(map.insert("a", 5.0), Some(1.0));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(5.0));
        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_get_missing() {
        assert_eq!(ScoreMap::new().get("nope"), None);
        assert!(ScoreMap::new().is_empty());
    }
}
