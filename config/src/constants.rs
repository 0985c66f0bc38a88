//! # Configuration Constants
//!
//! Centralized constants for the STEP viewer pipeline. The interleaved
//! vertex wire format, scene naming, and user-facing status strings are
//! defined here.
//!
//! ## Categories
//!
//! - **Wire Format**: Layout of the worker's interleaved vertex buffer
//! - **Scene**: Naming of the single displayed mesh object
//! - **Status**: Progress messages shown in the status line

// =============================================================================
// WIRE FORMAT CONSTANTS
// =============================================================================

/// Number of float components per vertex record in the worker's output.
///
/// The background triangulation worker emits one flat `Float32` buffer where
/// each vertex occupies nine consecutive floats: position, normal, and color,
/// three components each. This is a fixed wire contract with the worker, not
/// a tunable.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_STRIDE;
///
/// let buffer_len = 90;
/// assert_eq!(buffer_len % VERTEX_STRIDE, 0);
/// assert_eq!(buffer_len / VERTEX_STRIDE, 10); // vertices
/// ```
pub const VERTEX_STRIDE: usize = 9;

/// Number of components in each vertex attribute (x/y/z, nx/ny/nz, r/g/b).
pub const ATTRIBUTE_COMPONENTS: usize = 3;

/// Float offset of the position attribute within a vertex record.
///
/// # Example
///
/// ```rust
/// use config::constants::{POSITION_OFFSET, VERTEX_STRIDE};
///
/// let second_vertex_x = 1 * VERTEX_STRIDE + POSITION_OFFSET;
/// assert_eq!(second_vertex_x, 9);
/// ```
pub const POSITION_OFFSET: usize = 0;

/// Float offset of the normal attribute within a vertex record.
pub const NORMAL_OFFSET: usize = 3;

/// Float offset of the color attribute within a vertex record.
pub const COLOR_OFFSET: usize = 6;

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Display name assigned to the single mesh object in the host scene.
///
/// The scene holds at most one loaded model at a time; the rendering host
/// uses this name for the object it creates. Replacement is handle-based,
/// the name is informational.
pub const MESH_OBJECT_NAME: &str = "step";

// =============================================================================
// STATUS CONSTANTS
// =============================================================================

/// Status line text while a local file is being read.
pub const STATUS_UPLOADING: &str = "Uploading...";

/// Status line text while a catalog document is being fetched.
pub const STATUS_DOWNLOADING: &str = "Downloading...";

/// Status line text while the worker parses and triangulates the document.
pub const STATUS_TRIANGULATING: &str = "Parsing & triangulating...";

/// Status line text while the decoded mesh is inserted into the scene.
pub const STATUS_BUILDING_SCENE: &str = "Building scene...";

/// Significant digits used when formatting the elapsed load time.
///
/// # Example
///
/// ```rust
/// use config::constants::ELAPSED_SIG_DIGITS;
///
/// assert_eq!(ELAPSED_SIG_DIGITS, 3); // "Loaded in 1.23 sec"
/// ```
pub const ELAPSED_SIG_DIGITS: u32 = 3;
