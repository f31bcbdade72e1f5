//! Small vector types shared by block and entity coordinates.

mod vector3;

pub use vector3::Vector3;
