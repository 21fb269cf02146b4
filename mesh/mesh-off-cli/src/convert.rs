//! The `convert` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mesh_off::{Axis, AxisRemap, ExportParams, ImportParams, load_off, save_off};
use tracing::info;

/// Default source frame when only one of `--forward` / `--up` is given.
const DEFAULT_FORWARD: Axis = Axis::NegZ;
const DEFAULT_UP: Axis = Axis::Y;

pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub normals: bool,
    pub colors: bool,
    pub forward: Option<Axis>,
    pub up: Option<Axis>,
    pub import: ImportParams,
}

impl Options {
    /// Import params with the source-frame remap folded in.
    fn import_params(&self) -> Result<ImportParams> {
        if self.forward.is_none() && self.up.is_none() {
            return Ok(self.import);
        }
        let forward = self.forward.unwrap_or(DEFAULT_FORWARD);
        let up = self.up.unwrap_or(DEFAULT_UP);
        let remap = AxisRemap::from_forward_up(forward, up)
            .with_context(|| format!("invalid axes --forward {forward} --up {up}"))?;
        Ok(self.import.with_axis_remap(remap))
    }

    fn export_params(&self) -> ExportParams {
        ExportParams::plain()
            .with_emit_normals(self.normals)
            .with_emit_colors(self.colors)
    }
}

pub fn run(options: &Options) -> Result<()> {
    let import = options.import_params()?;
    let export = options.export_params();

    let doc = load_off(&options.input, &import)
        .with_context(|| format!("failed to load {}", options.input.display()))?;
    save_off(&doc.mesh, &options.output, &export)
        .with_context(|| format!("failed to save {}", options.output.display()))?;

    info!(
        from = %doc.variant,
        to = %export.variant(),
        "Converted {} -> {}",
        options.input.display(),
        options.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_off::FormatVariant;
    use tempfile::tempdir;

    fn options(input: PathBuf, output: PathBuf) -> Options {
        Options {
            input,
            output,
            normals: false,
            colors: false,
            forward: None,
            up: None,
            import: ImportParams::default(),
        }
    }

    #[test]
    fn converts_and_remaps() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.off");
        let output = dir.path().join("out.off");
        std::fs::write(&input, "OFF\n4 1 0\n0 1 0\n1 1 0\n1 1 1\n0 1 1\n4 0 1 2 3\n").unwrap();

        let mut opts = options(input, output.clone());
        opts.colors = true;
        opts.up = Some(Axis::Y);
        run(&opts).unwrap();

        let doc = load_off(&output, &ImportParams::default()).unwrap();
        assert_eq!(doc.variant, FormatVariant::Color);
        // +Y up in the source becomes +Z
        assert!((doc.mesh.vertices[0].z - 1.0).abs() < 1e-12);
        assert_eq!(doc.mesh.faces.len(), 1);
    }

    #[test]
    fn parallel_axes_are_rejected() {
        let mut opts = options(PathBuf::from("a.off"), PathBuf::from("b.off"));
        opts.forward = Some(Axis::Y);
        opts.up = Some(Axis::NegY);
        let err = run(&opts).unwrap_err();
        assert!(err.to_string().contains("invalid axes"));
    }
}
