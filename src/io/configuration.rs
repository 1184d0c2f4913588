//! Rendering, parsing and export defaults

// Text serialization
/// Rendered in place of absent cells
pub const DEFAULT_EMPTY_CELL: &str = " ";

// Input parsing
/// Column separator used when a table format does not name one
pub const DEFAULT_COLUMN_SEPARATOR: &str = ",";

// Pixel rendering
/// Edge length in pixels of one grid cell
pub const DEFAULT_CELL_SIZE: u32 = 5;

// Prevents a sparse grid with far-apart cells from allocating a huge image
/// Maximum allowed image side in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

/// Background colour of exported images
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Colour of grid lines
pub const GRID_LINE_COLOR: [u8; 4] = [200, 200, 200, 255];
/// Colour of populated cells
pub const CELL_COLOR: [u8; 4] = [32, 32, 32, 255];

// Output settings
/// Suffix added to the input stem for exported images
pub const OUTPUT_SUFFIX: &str = "_grid";
