//! Syscall table and its literal rendering
//!
//! A `SyscallTable` is the ordered list of `(name, number)` pairs extracted
//! from one kernel header. Serialization sorts by name and renders the
//! pairs as Rust tuple literals ready to splice into the code template.

/// One syscall as exposed by the kernel headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyscallEntry {
    pub name: String,
    pub number: i64,
}

impl SyscallEntry {
    pub fn new(name: impl Into<String>, number: i64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// Ordered collection of syscall entries for one architecture
#[derive(Debug, Clone, Default)]
pub struct SyscallTable {
    entries: Vec<SyscallEntry>,
}

impl SyscallTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry in parse order
    pub fn push(&mut self, entry: SyscallEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SyscallEntry] {
        &self.entries
    }

    /// Entries sorted by name ascending, case-sensitive.
    ///
    /// The sort is stable: duplicate names keep their parse order, so the
    /// generated map's insertion semantics decide which number wins.
    pub fn sorted_entries(&self) -> Vec<SyscallEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Render the sorted table as space-joined `("name", num),` literals.
    ///
    /// The result is spliced verbatim into the code template; an empty
    /// table renders as an empty string.
    pub fn sorted_literal(&self) -> String {
        self.sorted_entries()
            .iter()
            .map(|e| format!("(\"{}\", {}),", e.name, e.number))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, i64)]) -> SyscallTable {
        let mut t = SyscallTable::new();
        for (name, num) in pairs {
            t.push(SyscallEntry::new(*name, *num));
        }
        t
    }

    #[test]
    fn test_sorted_by_name_not_number() {
        let t = table(&[("read", 0), ("write", 1), ("open", 2)]);
        let sorted = t.sorted_entries();
        assert_eq!(sorted[0], SyscallEntry::new("open", 2));
        assert_eq!(sorted[1], SyscallEntry::new("read", 0));
        assert_eq!(sorted[2], SyscallEntry::new("write", 1));
    }

    #[test]
    fn test_literal_format() {
        let t = table(&[("write", 1), ("read", 0)]);
        assert_eq!(t.sorted_literal(), "(\"read\", 0), (\"write\", 1),");
    }

    #[test]
    fn test_empty_table_renders_empty_string() {
        assert_eq!(SyscallTable::new().sorted_literal(), "");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let t = table(&[("mmap", 9), ("brk", 12), ("close", 3)]);
        assert_eq!(t.sorted_literal(), t.sorted_literal());
    }

    #[test]
    fn test_duplicate_names_both_survive_in_parse_order() {
        // Conditional-compilation blocks can define a name twice; no dedup
        let t = table(&[("dup", 32), ("acct", 163), ("dup", 33)]);
        let sorted = t.sorted_entries();
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0].name, "acct");
        assert_eq!(sorted[1], SyscallEntry::new("dup", 32));
        assert_eq!(sorted[2], SyscallEntry::new("dup", 33));
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let t = table(&[("a_call", 1), ("B_call", 2)]);
        let sorted = t.sorted_entries();
        // ASCII order: uppercase before lowercase
        assert_eq!(sorted[0].name, "B_call");
        assert_eq!(sorted[1].name, "a_call");
    }
}
