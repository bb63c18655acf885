//! Density variants for the Android mipmap resource layout.
//!
//! Android launcher icons ship at one fixed pixel size per screen-density
//! bucket. The table here is the complete set this crate produces; it is
//! compiled in and never read from configuration.

/// One (density label, icon edge length) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityVariant {
    /// Android density qualifier, e.g. `"xhdpi"`.
    pub label: &'static str,

    /// Icon edge length in pixels at this density. Icons are square.
    pub edge: u32,
}

impl DensityVariant {
    /// Returns the resource directory name for this density, e.g. `mipmap-xhdpi`.
    pub fn dir_name(&self) -> String {
        format!("mipmap-{}", self.label)
    }
}

/// The five launcher icon densities, in ascending size order.
pub const DENSITY_VARIANTS: [DensityVariant; 5] = [
    DensityVariant { label: "mdpi", edge: 48 },
    DensityVariant { label: "hdpi", edge: 72 },
    DensityVariant { label: "xhdpi", edge: 96 },
    DensityVariant { label: "xxhdpi", edge: 144 },
    DensityVariant { label: "xxxhdpi", edge: 192 },
];
