//! A registry of the capabilities linked into this build.
//!
//! Optional integrations are selected with cargo features at build time, so
//! whether one is available is known statically. [exists] answers that question
//! by name without any runtime probing.

/// Capabilities that every build links.
const ALWAYS_LINKED: &[&str] = &[
    "core",
    "alloc",
    "std",
    "bumpalo",
    "html_escape",
    "tracing",
];

/// Alternative names for linked capabilities. The host system and operating
/// system interfaces are both provided by `std`.
const ALIASES: &[(&str, &str)] = &[("sys", "std"), ("os", "std")];

/// Capabilities that depend on cargo features.
const OPTIONAL: &[(&str, bool)] = &[("serde", cfg!(feature = "serde"))];

/// Returns `true` if the capability `name` is linked into this build.
///
/// Aliases such as `sys` resolve to the capability they name. Unknown names,
/// including this crate's own name, return `false`.
///
/// ```rust
/// assert!(balisage::capability::exists("sys"));
/// assert!(!balisage::capability::exists("does_not_exist"));
/// ```
pub fn exists(name: &str) -> bool {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, target)| *target);
    linked().any(|linked| linked == name)
}

/// Iterate over every capability linked into this build.
pub fn linked() -> impl Iterator<Item = &'static str> {
    ALWAYS_LINKED.iter().copied().chain(
        OPTIONAL
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(name, _)| *name),
    )
}
