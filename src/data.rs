use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use serde::Deserialize;

use crate::{values::ValueType, Error};

/// Literal argument of a uniform setter call.
///
/// Uniform files written by hand tend to quote the numbers, generated ones
/// don't; both are kept as the text they were written with. Integers get a
/// fractional part so they still read as floating point literals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UniformArg {
    Literal(String),
    Number(serde_json::Number),
}

impl From<&str> for UniformArg {
    fn from(value: &str) -> Self {
        UniformArg::Literal(value.to_string())
    }
}

impl fmt::Display for UniformArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformArg::Literal(it) => f.write_str(it),
            UniformArg::Number(it) if it.is_f64() => write!(f, "{}", it),
            UniformArg::Number(it) => write!(f, "{}.0", it),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UniformDeclaration {
    pub binding: u32,
    pub func: String,
    pub args: Vec<UniformArg>,
}

impl UniformDeclaration {
    pub fn value_type(&self) -> Result<ValueType, Error> {
        ValueType::from_gl_func(&self.func)
    }

    pub fn initializer(&self) -> Result<String, Error> {
        self.value_type()?.initializer(&self.args)
    }
}

/// Uniforms of a single test, keyed by name.
///
/// Every binding is unique; [`UniformSet::by_binding`] is how the set is
/// meant to be walked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformSet {
    uniforms: BTreeMap<String, UniformDeclaration>,
}

impl UniformSet {
    pub fn new(uniforms: BTreeMap<String, UniformDeclaration>) -> Result<Self, Error> {
        let mut seen: HashMap<u32, &str> = HashMap::new();
        for (name, decl) in &uniforms {
            if let Some(first) = seen.insert(decl.binding, name.as_str()) {
                return Err(Error::DuplicateBinding {
                    binding: decl.binding,
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }
        Ok(Self { uniforms })
    }

    pub fn open(file: impl AsRef<Path>) -> Result<Self, Error> {
        let source = File::open(file.as_ref())?;
        let result = Self::read(BufReader::new(source))?;
        log::info!(
            "loaded {} uniform(s) from {}",
            result.len(),
            file.as_ref().display()
        );
        Ok(result)
    }

    pub fn read<R: io::Read>(reader: R) -> Result<Self, Error> {
        Self::new(serde_json::from_reader(reader)?)
    }

    pub fn parse(source: &str) -> Result<Self, Error> {
        Self::new(serde_json::from_str(source)?)
    }

    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
    }

    pub fn by_binding(&self, binding: u32) -> Result<(&str, &UniformDeclaration), Error> {
        self.uniforms
            .iter()
            .find(|(_, decl)| decl.binding == binding)
            .map(|(name, decl)| (name.as_str(), decl))
            .ok_or(Error::MissingBinding(binding))
    }

    /// Uniforms ordered by binding `0..len`, failing on the first gap.
    pub fn in_binding_order(
        &self,
    ) -> impl Iterator<Item = Result<(u32, &str, &UniformDeclaration), Error>> + '_ {
        (0..self.len() as u32).map(move |binding| {
            self.by_binding(binding)
                .map(|(name, decl)| (binding, name, decl))
        })
    }
}
