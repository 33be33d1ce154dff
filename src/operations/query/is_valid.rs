use std::collections::HashMap;

use crate::mesh::Mesh;

/// Checks that every face has at least three corners and only in-range
/// indices.
pub struct IsValid<'a> {
    mesh: &'a Mesh,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    /// Executes the validation, returning `true` if the mesh is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        match self.mesh.validate() {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "mesh failed validation");
                false
            }
        }
    }
}

/// Checks that a valid mesh is closed and consistently wound.
///
/// Every directed edge must occur exactly once and its reverse must occur
/// exactly once, so each edge borders exactly two faces that traverse it in
/// opposite directions.
pub struct IsClosed<'a> {
    mesh: &'a Mesh,
}

impl<'a> IsClosed<'a> {
    /// Creates a new `IsClosed` query.
    #[must_use]
    pub fn new(mesh: &'a Mesh) -> Self {
        Self { mesh }
    }

    /// Executes the check.
    #[must_use]
    pub fn execute(&self) -> bool {
        let mut uses: HashMap<(usize, usize), usize> = HashMap::new();
        for edge in self.mesh.faces().iter().flat_map(|face| face.edges()) {
            *uses.entry(edge).or_default() += 1;
        }
        uses.iter()
            .all(|(&(a, b), &count)| count == 1 && uses.get(&(b, a)) == Some(&1))
    }
}
