//! WGSL shader loading with up-front diagnostics.
//!
//! wgpu reports shader problems through the device's uncaptured-error
//! handler, which by default panics somewhere inside pipeline creation. Every
//! shader here is run through naga first so failures surface as a
//! [`ShaderError`] naming the shader, the failing stage and the compiler text.

use std::fmt;

use thiserror::Error;

/// Entry point every render shader must export for its vertex stage.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Entry point every render shader must export for its fragment stage.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Programmable stage of a render pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_ENTRY,
            ShaderStage::Fragment => FRAGMENT_ENTRY,
        }
    }

    fn naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }

    fn from_naga(stage: naga::ShaderStage) -> Option<Self> {
        match stage {
            naga::ShaderStage::Vertex => Some(ShaderStage::Vertex),
            naga::ShaderStage::Fragment => Some(ShaderStage::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A shader that cannot be turned into a render pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShaderError {
    /// The source is not valid WGSL; no stage could be compiled.
    #[error("shader `{label}` failed to compile:\n{message}")]
    Parse { label: String, message: String },

    /// The module parsed but failed validation, in `stage` when the
    /// validator attributes the error to an entry point.
    #[error("shader `{label}` failed validation ({}):\n{message}", scope(.stage))]
    Validation {
        label: String,
        stage: Option<ShaderStage>,
        message: String,
    },

    /// A required stage is missing from the module.
    #[error("shader `{label}` has no {stage} entry point `{entry_point}`")]
    MissingEntryPoint {
        label: String,
        stage: ShaderStage,
        entry_point: &'static str,
    },
}

impl ShaderError {
    /// The stage the error is attributed to, if any.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::Parse { .. } => None,
            ShaderError::Validation { stage, .. } => *stage,
            ShaderError::MissingEntryPoint { stage, .. } => Some(*stage),
        }
    }
}

fn scope(stage: &Option<ShaderStage>) -> String {
    match stage {
        Some(stage) => format!("{stage} stage"),
        None => "module".to_string(),
    }
}

/// Parses and validates a render shader without touching the GPU.
///
/// The module must export a vertex entry point `vs_main` and a fragment
/// entry point `fs_main`.
pub fn validate_wgsl(label: &str, source: &str) -> Result<(), ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Parse {
        label: label.to_string(),
        message: e.emit_to_string(source),
    })?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator.validate(&module).map_err(|e| {
        let stage = match e.as_inner() {
            naga::valid::ValidationError::EntryPoint { stage, .. } => ShaderStage::from_naga(*stage),
            _ => None,
        };
        ShaderError::Validation {
            label: label.to_string(),
            stage,
            message: e.to_string(),
        }
    })?;

    for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
        let found = module
            .entry_points
            .iter()
            .any(|ep| ep.stage == stage.naga() && ep.name == stage.entry_point());
        if !found {
            return Err(ShaderError::MissingEntryPoint {
                label: label.to_string(),
                stage,
                entry_point: stage.entry_point(),
            });
        }
    }

    Ok(())
}

/// Validates `source` and creates the wgpu shader module.
pub fn create_render_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    validate_wgsl(label, source)?;
    log::debug!("shader `{label}` validated");

    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASS_THROUGH: &str = r#"
        @vertex
        fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
            return vec4<f32>(pos, 0.0, 1.0);
        }

        @fragment
        fn fs_main() -> @location(0) vec4<f32> {
            return vec4<f32>(1.0, 1.0, 1.0, 1.0);
        }
    "#;

    #[test]
    fn accepts_pass_through_shader() {
        assert_eq!(validate_wgsl("pass", PASS_THROUGH), Ok(()));
    }

    #[test]
    fn bundled_shaders_validate() {
        validate_wgsl("points", crate::render::points::SHADER).unwrap();
        validate_wgsl("triangle", crate::render::triangle::SHADER).unwrap();
    }

    #[test]
    fn syntax_error_is_a_parse_error() {
        let err = validate_wgsl("broken", "@vertex fn vs_main( -> {").unwrap_err();
        assert!(matches!(err, ShaderError::Parse { .. }), "{err:?}");
        assert_eq!(err.stage(), None);
        assert!(err.to_string().contains("`broken`"));
    }

    #[test]
    fn missing_fragment_stage_is_reported() {
        let src = r#"
            @vertex
            fn vs_main() -> @builtin(position) vec4<f32> {
                return vec4<f32>(0.0, 0.0, 0.0, 1.0);
            }
        "#;
        let err = validate_wgsl("vertex-only", src).unwrap_err();
        assert_eq!(err.stage(), Some(ShaderStage::Fragment));
        assert!(err.to_string().contains("fragment entry point `fs_main`"), "{err}");
    }

    #[test]
    fn stage_errors_name_the_stage() {
        // Fragment output must be decorated with a location.
        let src = r#"
            @vertex
            fn vs_main() -> @builtin(position) vec4<f32> {
                return vec4<f32>(0.0, 0.0, 0.0, 1.0);
            }

            @fragment
            fn fs_main() -> vec4<f32> {
                return vec4<f32>(1.0, 1.0, 1.0, 1.0);
            }
        "#;
        let err = validate_wgsl("undecorated", src).unwrap_err();
        assert_eq!(err.stage(), Some(ShaderStage::Fragment), "{err:?}");
        assert!(err.to_string().contains("fragment stage"), "{err}");
    }
}
