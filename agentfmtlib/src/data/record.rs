//! Typed data records parsed from tab-separated agent lines.

use serde::{Deserialize, Serialize};

/// Field separator inside a data line.
pub const FIELD_SEPARATOR: char = '\t';

/// Number of fields in a filesystem record.
pub const FILE_ENTRY_FIELDS: usize = 4;

/// Process records with at least this many fields carry the details the
/// agent only gets when it can open the process.
pub const PROCESS_DETAIL_FIELDS: usize = 4;

/// Kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// The agent marks directories with `D`; anything else is a file.
    pub fn from_code(code: &str) -> Self {
        if code == "D" {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    /// Tag shown in the type column.
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Directory => "<DIR>",
            EntryKind::File => "<FILE>",
        }
    }
}

/// One line of a directory listing: `type, size, modified, name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub kind: EntryKind,
    /// Raw byte count as sent by the agent
    pub size: String,
    /// Raw `MM/DD/YY HH:MM:SS` timestamp
    pub modified: String,
    pub name: String,
}

impl FileEntry {
    /// Parse a data line. Lines without exactly four fields yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [kind, size, modified, name] = fields.as_slice() else {
            return None;
        };

        Some(FileEntry {
            kind: EntryKind::from_code(kind),
            size: size.to_string(),
            modified: modified.to_string(),
            name: name.to_string(),
        })
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Details reported for processes the agent could open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDetails {
    pub architecture: String,
    pub user: String,
    pub session_id: String,
}

/// One line of a process listing: `name, ppid, pid, [arch, user, session]`.
///
/// The shape is decided once while parsing; missing trailing fields are
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessRecord {
    Full {
        name: String,
        ppid: String,
        pid: String,
        details: ProcessDetails,
    },
    Partial {
        name: String,
        ppid: String,
        pid: String,
    },
}

impl ProcessRecord {
    /// Parse a data line. Never fails: absent fields become empty strings.
    pub fn parse(line: &str) -> Self {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let field = |index: usize| fields.get(index).copied().unwrap_or_default().to_string();

        let name = field(0);
        let ppid = field(1);
        let pid = field(2);

        if fields.len() >= PROCESS_DETAIL_FIELDS {
            ProcessRecord::Full {
                name,
                ppid,
                pid,
                details: ProcessDetails {
                    architecture: field(3),
                    user: field(4),
                    session_id: field(5),
                },
            }
        } else {
            ProcessRecord::Partial { name, ppid, pid }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProcessRecord::Full { name, .. } | ProcessRecord::Partial { name, .. } => name,
        }
    }

    pub fn ppid(&self) -> &str {
        match self {
            ProcessRecord::Full { ppid, .. } | ProcessRecord::Partial { ppid, .. } => ppid,
        }
    }

    pub fn pid(&self) -> &str {
        match self {
            ProcessRecord::Full { pid, .. } | ProcessRecord::Partial { pid, .. } => pid,
        }
    }

    pub fn details(&self) -> Option<&ProcessDetails> {
        match self {
            ProcessRecord::Full { details, .. } => Some(details),
            ProcessRecord::Partial { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_parse() {
        let entry = FileEntry::parse("F\t295000\t03/31/25 12:32:05\tazure-groups.txt").unwrap();
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.size, "295000");
        assert_eq!(entry.modified, "03/31/25 12:32:05");
        assert_eq!(entry.name, "azure-groups.txt");
        assert!(!entry.is_directory());
    }

    #[test]
    fn test_file_entry_directory() {
        let entry = FileEntry::parse("D\t0\t10/23/24 12:33:00\tContacts").unwrap();
        assert!(entry.is_directory());
        assert_eq!(entry.kind.tag(), "<DIR>");
    }

    #[test]
    fn test_file_entry_wrong_field_count() {
        assert!(FileEntry::parse("F\t12\tname").is_none());
        assert!(FileEntry::parse("F\t12\t03/31/25 12:32:05\tname\t").is_none());
        assert!(FileEntry::parse("no tabs at all").is_none());
    }

    #[test]
    fn test_file_entry_keeps_empty_fields() {
        let entry = FileEntry::parse("F\t\t\t").unwrap();
        assert_eq!(entry.size, "");
        assert_eq!(entry.name, "");
    }

    #[test]
    fn test_process_record_full() {
        let record = ProcessRecord::parse("explorer.exe\t1000\t4242\tx64\tCORP\\alice\t1");
        assert_eq!(record.name(), "explorer.exe");
        assert_eq!(record.ppid(), "1000");
        assert_eq!(record.pid(), "4242");
        let details = record.details().unwrap();
        assert_eq!(details.architecture, "x64");
        assert_eq!(details.user, "CORP\\alice");
        assert_eq!(details.session_id, "1");
    }

    #[test]
    fn test_process_record_partial() {
        let record = ProcessRecord::parse("System\t0\t4");
        assert!(matches!(record, ProcessRecord::Partial { .. }));
        assert_eq!(record.ppid(), "0");
        assert_eq!(record.pid(), "4");
        assert!(record.details().is_none());
    }

    #[test]
    fn test_process_record_missing_fields_default_to_empty() {
        let record = ProcessRecord::parse("svchost.exe\t600");
        assert_eq!(record.name(), "svchost.exe");
        assert_eq!(record.ppid(), "600");
        assert_eq!(record.pid(), "");

        let record = ProcessRecord::parse("lsass.exe\t600\t700\tx64");
        let details = record.details().unwrap();
        assert_eq!(details.architecture, "x64");
        assert_eq!(details.user, "");
        assert_eq!(details.session_id, "");
    }

    #[test]
    fn test_process_record_extra_fields_are_ignored() {
        let record = ProcessRecord::parse("a\t1\t2\tx86\tbob\t0\textra\t");
        assert_eq!(record.details().unwrap().session_id, "0");
    }
}
