//! Registry of colormap names the renderer knows how to draw.
//!
//! The registry is built once by the caller and shared read-only between
//! image views as an `Arc<ColormapRegistry>`.

use tracing::info;

use crate::consts::REVERSED_COLORMAP_SUFFIX;

/// Colormaps every renderer is expected to provide.
pub const BUILTIN_COLORMAPS: &[&str] = &[
    "gray", "coolwarm", "viridis", "inferno", "plasma", "magma", "red", "green", "blue",
    "magenta", "yellow", "cyan", "Reds", "Greens", "Blues", "cool", "hot", "copper", "red_heat",
    "green_heat", "blue_heat", "spring", "summer", "autumn", "winter", "ocean", "terrain", "jet",
    "stdgamma", "hsv", "Accent", "Spectral", "PiYG", "PRGn", "YlGn", "YlGnBu", "RdBu", "RdPu",
    "RdYlBu", "RdYlGn",
];

/// Immutable set of valid colormap names.
#[derive(Clone, Debug)]
pub struct ColormapRegistry {
    names: Vec<String>,
}

impl ColormapRegistry {
    /// Registry holding only the built-in colormaps.
    pub fn builtin() -> Self {
        Self::with_custom(std::iter::empty::<&str>())
    }

    /// Registry holding the built-in colormaps followed by `custom` ones.
    ///
    /// Names are compared case-insensitively; a duplicate keeps the first
    /// spelling seen. Empty names are dropped.
    pub fn with_custom<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::with_capacity(BUILTIN_COLORMAPS.len());
        let builtin = BUILTIN_COLORMAPS.iter().map(|s| s.to_string());
        let custom = custom.into_iter().map(|s| s.as_ref().trim().to_string());

        for name in builtin.chain(custom) {
            if name.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
                continue;
            }
            names.push(name);
        }

        info!(count = names.len(), "Colormap registry built");
        Self { names }
    }

    /// Canonical spelling of `name`, if registered.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ColormapRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A colormap name split into its base name and reversal request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColormapRequest<'a> {
    pub base: &'a str,
    pub reversed: bool,
}

/// Split the `_r` reversal suffix off a colormap name.
///
/// The suffix is matched case-insensitively. A bare `"_r"` is not treated
/// as a reversal, since it leaves no base name to look up.
pub fn parse_colormap_name(name: &str) -> ColormapRequest<'_> {
    let name = name.trim();
    let suffix_len = REVERSED_COLORMAP_SUFFIX.len();

    if name.len() > suffix_len && name.is_char_boundary(name.len() - suffix_len) {
        let (base, tail) = name.split_at(name.len() - suffix_len);
        if tail.eq_ignore_ascii_case(REVERSED_COLORMAP_SUFFIX) {
            return ColormapRequest {
                base,
                reversed: true,
            };
        }
    }

    ColormapRequest {
        base: name,
        reversed: false,
    }
}
