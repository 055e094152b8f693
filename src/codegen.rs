use convert_case::{Case, Casing};

use crate::{data::UniformSet, Error};

/// Name of the source collection entry the shader literal is added under.
pub const SHADER_SOURCE_NAME: &str = "frag1";
/// Test group the registration line adds cases to.
pub const DEFAULT_GROUP: &str = "graphicsFuzzTests";

/// Naming of a single generated test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDeclaration {
    name: String,
    case_name: String,
    group: String,
}

impl TestDeclaration {
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(Error::InvalidTestName(name));
        }
        Ok(Self {
            case_name: name.to_case(Case::Snake),
            group: DEFAULT_GROUP.to_string(),
            name,
        })
    }

    pub fn with_case_name(mut self, case_name: impl Into<String>) -> Self {
        self.case_name = case_name.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    pub fn create_progs_func_name(&self) -> String {
        format!("create{}Progs", self.name)
    }

    pub fn run_func_name(&self) -> String {
        format!("run{}", self.name)
    }

    /// Emits both function bodies: shader registration embedding
    /// `asm_literal` and the test run declaring `uniforms`.
    pub fn emit(&self, asm_literal: &str, uniforms: &UniformSet) -> Result<String, Error> {
        let declarations = uniforms_to_c_decl(uniforms)?;

        let mut res = String::new();
        res += &format!("void {} (SourceCollections& dst)\n", self.create_progs_func_name());
        res += "{\n";
        res += &format!("dst.spirvAsmSources.add(\"{}\") <<\n", SHADER_SOURCE_NAME);
        res += asm_literal;
        res += ";\n";
        res += "}\n\n";

        res += &format!("tcu::TestStatus {} (Context& context) {{\n", self.run_func_name());
        res += "std::vector<UniformEntry> uniformEntries;\n";
        res += "UniformEntry uniformEntry;\n\n";
        res += &declarations;
        res += "return renderShaderPair(context, uniformEntries);\n";
        res += "}\n";

        Ok(res)
    }

    /// Line adding this case to its test group.
    pub fn registration(&self) -> String {
        format!(
            "addFunctionCaseWithPrograms({}.get(), \"{}\", \"\", {}, {});\n",
            self.group,
            self.case_name,
            self.create_progs_func_name(),
            self.run_func_name()
        )
    }
}

/// Declares every uniform as a local and pushes it onto `uniformEntries`,
/// in binding order.
pub fn uniforms_to_c_decl(uniforms: &UniformSet) -> Result<String, Error> {
    let mut res = String::new();
    for entry in uniforms.in_binding_order() {
        let (binding, name, decl) = entry?;
        let ty = decl.value_type()?;
        let init = decl.initializer()?;
        log::debug!("binding {}: {} {} = {}", binding, ty, name, init);

        res += &format!("// {}\n", name);
        res += &format!("{} u{} = {};\n", ty, binding, init);
        res += &format!("uniformEntry.size = sizeof({});\n", ty);
        res += &format!("uniformEntry.value = (void *)(&u{});\n", binding);
        res += "uniformEntries.push_back(uniformEntry);\n\n";
    }
    Ok(res)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
