use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};

const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const RESOURCES_XML: &str = include_str!("resources/resources.gresource.xml.in");

// ===== TRAITS =====

trait StringExtensions {
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String>;
}

impl<T> StringExtensions for T
where
    T: AsRef<str>,
{
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String> {
        let text = self.as_ref();
        let parts: Vec<&str> = text.split(from).collect();
        let actual_count = parts.len() - 1;

        if actual_count != count {
            bail!(
                "Expected to replace exactly {count} occurrence(s) of '{from}' with '{to}' in '{text}', but found {actual_count}."
            );
        }

        Ok(parts.join(to))
    }
}

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    resources_dir: PathBuf,
    resources_xml_file: PathBuf,
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Self {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let resources_dir = root.join("resources");
        let output_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
        let resources_xml_file = output_dir.join("resources.xml");
        let compiled_resources_file = output_dir.join(RESOURCES_FILE_NAME);

        Self {
            resources_dir,
            resources_xml_file,
            compiled_resources_file,
        }
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    version: &'static str,
    id: String,
    prefix: String,
    title: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let id = Self::extract_string(metadata, "id")?;
        let prefix = Self::extract_string(metadata, "prefix")?;
        let title = Self::extract_string(metadata, "title")?;

        Ok(Self {
            name,
            version,
            id,
            prefix,
            title,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }
}

// ===== RESOURCE COMPILER =====

struct ResourceCompiler<'a> {
    config: &'a BuildConfiguration,
    app_prefix: &'a str,
}

impl<'a> ResourceCompiler<'a> {
    fn new(config: &'a BuildConfiguration, app_prefix: &'a str) -> Self {
        Self { config, app_prefix }
    }

    fn compile_resources(self) -> Result<()> {
        let final_xml = self.build_final_resources_xml()?;
        std::fs::write(&self.config.resources_xml_file, &final_xml)?;

        glib_build_tools::compile_resources(
            &[&self.config.resources_dir],
            self.config.resources_xml_file.to_str().context("Invalid XML path")?,
            self.config.compiled_resources_file.to_str().context("Invalid compiled file path")?,
        );

        Ok(())
    }

    fn build_final_resources_xml(&self) -> Result<String> {
        RESOURCES_XML.replace_exactly("@APP_PREFIX@", self.app_prefix, 1)
    }
}

// ===== CARGO ENVIRONMENT VARIABLES =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_application_metadata(metadata: &ApplicationMetadata, resources_path: &Path) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new(),
            app_metadata: ApplicationMetadata::extract_from_cargo()?,
        })
    }

    fn execute_complete_build(&self) -> Result<()> {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=Cargo.toml");
        println!("cargo:rerun-if-changed=resources");

        ResourceCompiler::new(&self.config, &self.app_metadata.prefix)
            .compile_resources()?;

        CargoEnvironmentVariables::emit_application_metadata(
            &self.app_metadata,
            &self.config.compiled_resources_file,
        );

        Ok(())
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
