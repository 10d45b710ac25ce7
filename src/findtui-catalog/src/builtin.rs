//! Built-in option tables for the supported `find` dialects.
//!
//! The tables are static data. Choosing a dialect is left to configuration;
//! nothing here inspects the running platform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::option::{OptionEntry, OptionKind};

/// Option dialect of the wrapped `find` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// GNU findutils.
    #[default]
    Gnu,
    /// BSD / macOS find.
    Bsd,
    /// Only the options both dialects share.
    Posix,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Gnu => "gnu",
            Dialect::Bsd => "bsd",
            Dialect::Posix => "posix",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gnu" | "linux" => Ok(Dialect::Gnu),
            "bsd" | "macos" | "darwin" => Ok(Dialect::Bsd),
            "posix" | "common" => Ok(Dialect::Posix),
            other => Err(format!("unknown find dialect '{other}'")),
        }
    }
}

impl Catalog {
    /// The shipped catalog for `dialect`: the common table plus the
    /// dialect-specific additions.
    pub fn builtin(dialect: Dialect) -> CatalogResult<Self> {
        let mut catalog = Catalog::from_entries(common_options())?;
        match dialect {
            Dialect::Gnu => catalog.extend_entries(gnu_options())?,
            Dialect::Bsd => catalog.extend_entries(bsd_options())?,
            Dialect::Posix => {}
        }
        Ok(catalog)
    }
}

fn checkbox(name: &str, description: &str) -> OptionEntry {
    OptionEntry::new(name, OptionKind::Checkbox, description)
}

fn choice(name: &str, description: &str, choices: &[&str]) -> OptionEntry {
    OptionEntry::new(name, OptionKind::Choice, description).with_choices(choices)
}

fn path(name: &str, description: &str) -> OptionEntry {
    OptionEntry::new(name, OptionKind::PathInput, description)
}

fn text(name: &str, description: &str) -> OptionEntry {
    OptionEntry::new(name, OptionKind::TextInput, description)
}

fn int(name: &str, description: &str) -> OptionEntry {
    OptionEntry::new(name, OptionKind::IntInput, description)
}

const FILE_TYPES: &[&str] = &["b", "c", "d", "p", "f", "l", "s"];

type Groups = Vec<(&'static str, Vec<OptionEntry>)>;

fn common_options() -> Groups {
    vec![
        (
            "Options",
            vec![
                checkbox(
                    "H",
                    "only follow symlinks when resolving command-line arguments",
                ),
                checkbox("L", "follow symlinks"),
                checkbox("P", "never follow symlinks"),
                checkbox("depth", "process contents before the directory itself").with_example(
                    "
                    $ find .
                    .
                    ./a
                    ./b

                    $ find . -depth
                    ./a
                    ./b
                    .
                    ",
                ),
                checkbox("ignore_readdir_race", "ignore stat file failure"),
                int("maxdepth", "apply at most n levels").with_example(
                    "
                    $ find . -maxdepth 0
                    .

                    $ find . -maxdepth 2
                    .
                    ./1
                    ./1/2
                    ",
                ),
                int("mindepth", "do not apply at levels less than n").with_example(
                    "
                    $ find . -mindepth 2
                    ./1/2
                    ",
                ),
                checkbox("mount", "do not apply on other filesystems"),
                checkbox("noignore_readdir_race", "turn off -ignore_readdir_race"),
            ],
        ),
        (
            "Name",
            vec![
                path(
                    "ilname",
                    "is a symbolic link matched given pattern, case insensitive",
                ),
                path("iname", "basename matches pattern given, case insensitive").with_example(
                    "
                    $ find . -iname 'ls*'
                    ./lsdiff
                    ",
                ),
                path(
                    "iregex",
                    "name matches regular expression pattern given, case insensitive",
                ),
                path("iwholename", "name matches pattern given, case insensitive"),
                path("lname", "is a symbolic link matched given pattern"),
                path("name", "basename matches pattern given").with_example(
                    "
                    $ find . -name 'ls*'
                    ./lsdiff
                    $ find . -name '*ls*'
                    ./lsdiff
                    ./hwloc-ls
                    ",
                ),
                path("path", "pathname matches pattern given").with_example(
                    "
                    $ find . -path './ls*' # match path
                    ./lsdiff
                    ",
                ),
                path("regex", "name matches regular expression pattern given"),
                path("samefile", "refers to the same inode as name given"),
            ],
        ),
        (
            "Perm",
            vec![
                text("group", "belongs to group given"),
                checkbox("nogroup", "no group corresponds to file's numeric group ID"),
                checkbox("nouser", "no user corresponds to file's numeric user ID"),
                text("perm", "the permission bits mode are set for the file").with_example(
                    "
                    # find files writable by their owner and group
                    $ find . -perm -220
                    # find files writable by their owner or group
                    $ find . -perm /220
                    ",
                ),
                text("user", "is owned by user given"),
            ],
        ),
        (
            "Size",
            vec![
                checkbox("empty", "is empty and is a regular file or directory"),
                text("size", "uses n units[b|c|w|k|M|G] of space").with_example(
                    "
                    $ find . -size +20k # files > 20k
                    $ find . -size -20k # files < 20k
                    ",
                ),
            ],
        ),
        (
            "Time",
            vec![
                text("amin", "accessed n minutes ago"),
                path(
                    "anewer",
                    "accessed more recently than given file was modified",
                ),
                text("cmin", "status was changed n minutes ago"),
                path(
                    "cnewer",
                    "status was changed more recently than given file was modified",
                ),
                text("mmin", "modified n minutes ago").with_example(
                    "
                    $ find . -mmin +20 # now - mtime > 20 minutes
                    $ find . -mmin -20 # now - mtime < 20 minutes
                    ",
                ),
                path("newer", "modified more recently than file given"),
                text("used", "accessed n days after its status was last changed"),
            ],
        ),
        (
            "Type",
            vec![
                text("fstype", "is on a filesystem of given type"),
                choice("type", "is of type chosen", FILE_TYPES).with_example(
                    "
                    $ find . -type f # file
                    $ find . -type d # directory
                    $ find . -type l # symbolic link
                    ",
                ),
            ],
        ),
        (
            "Others",
            vec![
                int("inum", "has inode number n"),
                text("links", "has n links"),
                checkbox("true", "always true"),
                checkbox("false", "always false"),
            ],
        ),
        (
            "Actions",
            vec![
                checkbox("delete", "delete files"),
                text("exec", "execute command").with_example(
                    "
                    $ find . -name 'trash*' -exec rm {} ;
                    ",
                ),
                text(
                    "execdir",
                    "execute command from the subdirectory containing matched file",
                ),
                checkbox("ls", "list current file with ls -dils"),
                text("ok", "like -exec but ask user first"),
                text("okdir", "like -execdir but ask user first"),
                checkbox("print", "print full file name"),
                checkbox(
                    "print0",
                    "print full file name, followed by a null character",
                ),
                checkbox(
                    "prune",
                    "if the file is a directory, do not descend into it",
                ),
            ],
        ),
    ]
}

fn gnu_options() -> Groups {
    vec![
        (
            "Options",
            vec![
                checkbox(
                    "daystart",
                    "measure times from the beginning of today rather than from 24 hours ago",
                ),
                choice(
                    "regextype",
                    "change the regular expression syntax",
                    &[
                        "emacs",
                        "posix-awk",
                        "posix-basic",
                        "posix-egrep",
                        "posix-extended",
                    ],
                ),
                checkbox("xdev", "do not apply on other filesystems"),
            ],
        ),
        (
            "Perm",
            vec![
                checkbox("readable", "is readable"),
                checkbox("writable", "is writable"),
                checkbox("executable", "is executable"),
                text("gid", "numeric group ID is n"),
                text("uid", "numeric user ID is n"),
            ],
        ),
        (
            "Time",
            vec![
                text("atime", "accessed n*24 hours ago"),
                text("ctime", "status was changed n*24 hours ago"),
                text("mtime", "modified n*24 hours ago").with_example(
                    "
                    $ find . -mtime +20 # now - mtime > 20 days
                    $ find . -mtime -20 # now - mtime < 20 days
                    ",
                ),
            ],
        ),
        (
            "Type",
            vec![choice(
                "xtype",
                "same as -type, but for symbolic link, it checks the type of file",
                FILE_TYPES,
            )],
        ),
        (
            "Actions",
            vec![
                path("fls", "like -ls but write to file like -fprint"),
                path("fprint", "print full file name into file"),
                path("fprint0", "like -print0 but write to file like -fprint"),
                path("fprintf", "like -printf but write to file like -fprint"),
                text("printf", "print format on the standard output"),
                checkbox("quit", "exit immediately"),
            ],
        ),
    ]
}

fn bsd_options() -> Groups {
    vec![
        (
            "Options",
            vec![
                checkbox("E", "use extended regular expressions"),
                checkbox("X", "safely use find with xargs(1)"),
                text("f", "specify a file hierarchy to traverse"),
                checkbox("s", "traverse file hierarchies in lexicographical order"),
                checkbox(
                    "x",
                    "do not apply on directories have a different device number",
                ),
            ],
        ),
        (
            "Name",
            vec![path(
                "ipath",
                "pathname matches pattern given, case insensitive",
            )],
        ),
        (
            "Perm",
            vec![
                text("gid", "same as -group gname"),
                text("flags", "with or without specific flags"),
            ],
        ),
        (
            "Time",
            vec![
                text("Bmin", "file's inode created n minutes ago"),
                path(
                    "Bnewer",
                    "file's inode created more recently than given file was modified",
                ),
                text(
                    "Btime",
                    "file's inode created n units[s|m|h|d|w] ago, the default unit is d",
                ),
                text(
                    "atime",
                    "accessed n units[s|m|h|d|w] ago, the default unit is d",
                ),
                text(
                    "ctime",
                    "status changed n units[s|m|h|d|w] ago, the default unit is d",
                ),
                text(
                    "mtime",
                    "modified n units[s|m|h|d|w] ago, the default unit is d",
                ),
            ],
        ),
        (
            "Type",
            vec![
                checkbox("xattr", "has any extended attributes"),
                text(
                    "xattrname",
                    "has an extended attribute with specified name",
                ),
            ],
        ),
        (
            "Others",
            vec![text("acl", "locate files with extended ACLs")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("gnu".parse::<Dialect>(), Ok(Dialect::Gnu));
        assert_eq!("BSD".parse::<Dialect>(), Ok(Dialect::Bsd));
        assert_eq!("darwin".parse::<Dialect>(), Ok(Dialect::Bsd));
        assert_eq!("posix".parse::<Dialect>(), Ok(Dialect::Posix));
        assert!("plan9".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_dialect_display_round_trip() {
        for dialect in [Dialect::Gnu, Dialect::Bsd, Dialect::Posix] {
            assert_eq!(dialect.to_string().parse::<Dialect>(), Ok(dialect));
        }
    }
}
