use std::fmt;

use crate::{data::UniformArg, Error};

/// C++ value types a uniform can be declared with in generated test code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueType {
    Float,
    Vec2,
}

impl ValueType {
    /// Resolves the GL uniform setter named in a uniforms JSON file.
    pub fn from_gl_func(func: &str) -> Result<Self, Error> {
        Ok(match func {
            "glUniform1f" => Self::Float,
            "glUniform2f" => Self::Vec2,
            other => return Err(Error::UnsupportedFunction(other.to_string())),
        })
    }

    pub fn cpp_name(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Vec2 => "tcu::Vec2",
        }
    }

    pub fn component_count(&self) -> usize {
        match self {
            Self::Float => 1,
            Self::Vec2 => 2,
        }
    }

    /// Produces the C++ expression constructing a value of this type from
    /// literal arguments.
    pub fn initializer(&self, args: &[UniformArg]) -> Result<String, Error> {
        if args.len() != self.component_count() {
            return Err(Error::InvalidArgumentCount {
                ty: *self,
                expected: self.component_count(),
                found: args.len(),
            });
        }

        Ok(match self {
            Self::Float => format!("{}f", args[0]),
            Self::Vec2 => format!("{}({}f, {}f)", self.cpp_name(), args[0], args[1]),
        })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cpp_name())
    }
}
