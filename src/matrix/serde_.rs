//! Matrices serialize as their flat row-major element arrays.

use super::{Matrix3x3, Matrix3x4};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Matrix3x3 {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.elements().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Matrix3x3 {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let elements = <[f32; 9]>::deserialize(d)?;
        Ok(Matrix3x3::from_array(elements))
    }
}

impl Serialize for Matrix3x4 {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.elements().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Matrix3x4 {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let elements = <[f32; 12]>::deserialize(d)?;
        Ok(Matrix3x4::from_array(elements))
    }
}
