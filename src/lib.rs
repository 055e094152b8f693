//! Generates GraphicsFuzz test case boilerplate for the Vulkan CTS from a
//! SPIR-V assembly shader and a JSON file of uniform declarations.

use std::path::{Path, PathBuf};

pub mod codegen;
pub mod data;
pub mod util;
pub mod values;

pub use codegen::TestDeclaration;
pub use data::{UniformArg, UniformDeclaration, UniformSet};
pub use values::ValueType;

/// Test name used when none is given on the command line.
pub const DEFAULT_TEST_NAME: &str = "Hugues";

/// Input files of a single generated test case.
#[derive(Debug, Clone)]
pub struct TestInputs {
    pub reference: PathBuf,
    pub variant: PathBuf,
    pub uniforms: PathBuf,
}

impl TestInputs {
    pub fn new(
        reference: impl Into<PathBuf>,
        variant: impl Into<PathBuf>,
        uniforms: impl Into<PathBuf>,
    ) -> Self {
        Self {
            reference: reference.into(),
            variant: variant.into(),
            uniforms: uniforms.into(),
        }
    }

    /// Both shaders must exist before anything is read.
    pub fn check_shaders(&self) -> Result<(), Error> {
        for path in [&self.reference, &self.variant] {
            require_file(path)?;
        }
        Ok(())
    }

    /// Produces the full text for `test`; nothing is returned unless every
    /// step succeeded.
    pub fn generate(&self, test: &TestDeclaration) -> Result<String, Error> {
        self.check_shaders()?;
        log::info!(
            "reference shader {} is not embedded in the generated test",
            self.reference.display()
        );

        let asm = util::read_asm(&self.variant)?;
        let uniforms = UniformSet::open(&self.uniforms)?;
        test.emit(&asm, &uniforms)
    }
}

fn require_file(path: &Path) -> Result<(), Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingFile(path.to_path_buf()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file does not exist: {0}")]
    MissingFile(PathBuf),
    #[error("invalid or unsupported GL function: {0}")]
    UnsupportedFunction(String),
    #[error("{ty} expects {expected} argument(s); found {found}")]
    InvalidArgumentCount {
        ty: ValueType,
        expected: usize,
        found: usize,
    },
    #[error("no uniform declared with binding {0}")]
    MissingBinding(u32),
    #[error("uniforms {first:?} and {second:?} share binding {binding}")]
    DuplicateBinding {
        binding: u32,
        first: String,
        second: String,
    },
    #[error("test name {0:?} is not a valid C++ identifier")]
    InvalidTestName(String),

    #[error("malformed uniforms file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
