pub trait MaybeSplitOnce {
    fn maybe_split_once(&self, split: char) -> (&str, Option<&str>);
}

impl MaybeSplitOnce for str {
    fn maybe_split_once(&self, split: char) -> (&str, Option<&str>) {
        match self.split_once(split) {
            Some((left, right)) => (left, Some(right)),
            None => (self, None),
        }
    }
}
