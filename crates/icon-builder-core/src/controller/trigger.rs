/// User actions the controllers respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pick a new source image.
    PickSource,
    /// Pick a new destination directory.
    PickDestination,
    /// Generate the icon set from the displayed source into the displayed destination.
    Generate,
}
