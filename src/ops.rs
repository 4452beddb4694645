use crate::alg::{Mat, Quat, Vec3};
use crate::error::{OpError, TransformError};
use crate::hash::{const_hash, hash};
use crate::transform;

pub type Builder = fn(&[f32]) -> Result<Mat, TransformError>;

#[derive(Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub params: &'static [&'static str],
    build: Builder,
}

impl Operation {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn build(&self, args: &[f32]) -> Result<Mat, OpError> {
        if args.len() != self.arity() {
            return Err(OpError::Arity {
                name: self.name,
                expected: self.arity(),
                found: args.len(),
            });
        }

        (self.build)(args).map_err(OpError::from)
    }
}

const VOLUME: &[&str] = &["left", "right", "bottom", "top", "near", "far"];

const OPERATIONS: &[Operation] = &[
    Operation { name: "frustum", params: VOLUME, build: build_frustum },
    Operation { name: "ortho", params: VOLUME, build: build_ortho },
    Operation {
        name: "perspective",
        params: &["fov_degrees", "aspect", "near", "far"],
        build: build_perspective,
    },
    Operation {
        name: "translation",
        params: &["x", "y", "z"],
        build: build_translation,
    },
    Operation {
        name: "rotation",
        params: &["x", "y", "z", "radians"],
        build: build_rotation,
    },
    Operation {
        name: "rotation_quat",
        params: &["w", "x", "y", "z"],
        build: build_rotation_quat,
    },
];

// Builders receive exactly `params.len()` arguments

fn build_frustum(a: &[f32]) -> Result<Mat, TransformError> {
    transform::try_frustum(a[0], a[1], a[2], a[3], a[4], a[5])
}

fn build_ortho(a: &[f32]) -> Result<Mat, TransformError> {
    transform::try_ortho(a[0], a[1], a[2], a[3], a[4], a[5])
}

fn build_perspective(a: &[f32]) -> Result<Mat, TransformError> {
    transform::try_perspective(a[0], a[1], a[2], a[3])
}

fn build_translation(a: &[f32]) -> Result<Mat, TransformError> {
    Ok(transform::translation(Vec3::new(a[0], a[1], a[2])))
}

fn build_rotation(a: &[f32]) -> Result<Mat, TransformError> {
    transform::try_rotation_axis_angle(Vec3::new(a[0], a[1], a[2]), a[3])
}

fn build_rotation_quat(a: &[f32]) -> Result<Mat, TransformError> {
    Ok(transform::rotation_quat(Quat::new(a[0], a[1], a[2], a[3])))
}

/// Named transform builders, keyed by name digest
pub struct Operations {
    table: fnv::FnvHashMap<u64, Operation>,
}

impl Operations {
    pub fn new() -> Operations {
        let mut table = fnv::FnvHashMap::with_capacity_and_hasher(
            OPERATIONS.len(),
            Default::default(),
        );

        for operation in OPERATIONS {
            let previous = table.insert(const_hash(operation.name), *operation);
            debug_assert!(previous.is_none());
        }

        Operations { table }
    }

    pub fn get(&self, name: &str) -> Result<&Operation, OpError> {
        // A digest hit from a different name is still a miss
        match self.table.get(&hash(name)) {
            Some(operation) if operation.name == name => Ok(operation),
            _ => {
                log::warn!("Unknown operation \"{}\"", name);
                Err(OpError::Unknown(name.to_string()))
            }
        }
    }

    pub fn run(&self, name: &str, args: &[f32]) -> Result<Mat, OpError> {
        self.get(name)?.build(args)
    }

    /// Operations in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        OPERATIONS.iter()
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }
}

impl Default for Operations {
    fn default() -> Operations {
        Operations::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::alg::*;
    use crate::error::*;
    use crate::ops::*;
    use crate::transform;

    #[test]
    fn every_operation_registered() {
        let operations = Operations::new();
        assert!(operations.count() == OPERATIONS.len());

        for operation in operations.iter() {
            let found = operations.get(operation.name).unwrap();
            assert!(found.name == operation.name);
        }
    }

    #[test]
    fn run_matches_builders() {
        let operations = Operations::new();

        let matrix = operations.run("frustum", &[-1., 1., -1., 1., 1., 10.]);
        assert!(matrix == Ok(transform::frustum(-1., 1., -1., 1., 1., 10.)));

        let matrix = operations.run("perspective", &[60., 1.5, 0.1, 100.]);
        assert!(matrix == Ok(transform::perspective(60., 1.5, 0.1, 100.)));

        let matrix = operations.run("translation", &[1., 2., 3.]);
        assert!(matrix == Ok(transform::translation(Vec3::new(1., 2., 3.))));

        let matrix = operations.run("rotation_quat", &[1., 0., 0., 0.]);
        assert!(matrix == Ok(Mat::identity()));
    }

    #[test]
    fn unknown_operation() {
        let operations = Operations::new();

        let result = operations.run("shear", &[1.]);
        assert!(result == Err(OpError::Unknown("shear".to_string())));

        assert!(operations.get("Frustum").is_err());
    }

    #[test]
    fn wrong_arity() {
        let operations = Operations::new();
        let result = operations.run("ortho", &[1., 2., 3.]);

        assert!(result == Err(OpError::Arity {
            name: "ortho",
            expected: 6,
            found: 3,
        }));
    }

    #[test]
    fn transform_errors_pass_through() {
        let operations = Operations::new();

        let result = operations.run("rotation", &[0., 0., 0., 1.]);
        assert!(result == Err(OpError::Transform(TransformError::ZeroAxis)));

        let error = operations.run("ortho", &[0., 0., -1., 1., 1., 2.]).unwrap_err();
        eprintln!("{}", error);
        assert!(error.to_string().contains("left/right"));
    }
}
