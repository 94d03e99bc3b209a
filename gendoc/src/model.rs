//! Data model for collected package signatures, independent of output format.

use std::path::PathBuf;

/// A candidate source file produced by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path as matched by the glob.
    pub path: PathBuf,
    /// Path relative to the scan root, e.g. "arrutil/arrutil.go"
    pub rel_path: String,
    /// Name of the owning subdirectory (the package key)
    pub package: String,
}

/// Short and display names of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName {
    /// Subdirectory name, e.g. "arrutil"
    pub raw: String,
    /// Suffix-stripped and remapped name, e.g. "array/Slice"
    pub display: String,
}

/// One exported declaration's textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub text: String,
}

/// Signatures collected from a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGroup {
    pub rel_path: String,
    pub signatures: Vec<FunctionSignature>,
}

/// A contiguous run of files belonging to the same package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSection {
    pub name: PackageName,
    /// e.g. "github.com/gookit/goutil/arrutil"
    pub pkg_path: String,
    /// Only files that yielded at least one signature
    pub groups: Vec<SourceGroup>,
}
