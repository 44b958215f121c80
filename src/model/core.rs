//! Core 3MF types and structures

use nalgebra::Point3;

/// A 3D vertex with x, y, z coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<&Vertex> for Point3<f64> {
    fn from(v: &Vertex) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

/// A triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Index of first vertex
    pub v1: usize,
    /// Index of second vertex
    pub v2: usize,
    /// Index of third vertex
    pub v3: usize,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v1: usize, v2: usize, v3: usize) -> Self {
        Self { v1, v2, v3 }
    }
}

/// A 3D mesh containing vertices and triangles
///
/// An empty `vertices` or `triangles` list stands for a `<mesh>` whose
/// `<vertices>` or `<triangles>` element carried no data.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// List of vertices
    pub vertices: Vec<Vertex>,
    /// List of triangles
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mesh with pre-allocated capacity
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }
}

/// A resource object
#[derive(Debug, Clone)]
pub struct Object {
    /// Object ID, as written in the `id` attribute
    pub id: String,
    /// Mesh data; `None` for objects built from components only
    pub mesh: Option<Mesh>,
}

impl Object {
    /// Create a new object without geometry
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mesh: None,
        }
    }

    /// Create a new object with a mesh
    pub fn with_mesh(id: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::new(id)
        }
    }
}

/// Resources section containing objects
#[derive(Debug, Clone, Default)]
pub struct Resources {
    /// List of objects, in document order
    pub objects: Vec<Object>,
}

impl Resources {
    /// Create a new empty resources section
    pub fn new() -> Self {
        Self::default()
    }

    /// First object whose id matches
    pub fn find_object(&self, id: &str) -> Option<&Object> {
        self.objects.iter().find(|obj| obj.id == id)
    }
}

/// An item to be built, referencing an object
#[derive(Debug, Clone)]
pub struct BuildItem {
    /// Reference to object ID
    pub objectid: String,
    /// Raw `transform` attribute: 12 values forming a 4x3 matrix in row-major order
    pub transform: Option<String>,
    /// Part number (optional)
    pub partnumber: Option<String>,
}

impl BuildItem {
    /// Create a new build item
    pub fn new(objectid: impl Into<String>) -> Self {
        Self {
            objectid: objectid.into(),
            transform: None,
            partnumber: None,
        }
    }

    /// Create a new build item with a transform attribute
    pub fn with_transform(objectid: impl Into<String>, transform: impl Into<String>) -> Self {
        Self {
            transform: Some(transform.into()),
            ..Self::new(objectid)
        }
    }
}

/// Build section specifying which objects to manufacture
#[derive(Debug, Clone, Default)]
pub struct Build {
    /// List of items to build
    pub items: Vec<BuildItem>,
}

impl Build {
    /// Create a new empty build section
    pub fn new() -> Self {
        Self::default()
    }
}

/// Metadata entry for 3MF package
///
/// According to the 3MF Core Specification, metadata elements contain a
/// required `name` attribute and text content value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    /// Name of the metadata entry
    pub name: String,
    /// Value of the metadata entry
    pub value: String,
}

impl MetadataEntry {
    /// Create a new metadata entry
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Complete 3MF model
#[derive(Debug, Clone)]
pub struct Model {
    /// Unit of measurement (e.g., "millimeter", "meter")
    pub unit: String,
    /// Metadata entries, in document order
    pub metadata: Vec<MetadataEntry>,
    /// Resources (objects)
    pub resources: Resources,
    /// Build specification
    pub build: Build,
}

impl Model {
    /// Create a new empty model
    pub fn new() -> Self {
        Self {
            unit: "millimeter".to_string(),
            metadata: Vec::new(),
            resources: Resources::new(),
            build: Build::new(),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
