use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use vinemesh::{MeshBuffer, Skeleton, TubeBuilder, TubeConfig};

mod cli;

use cli::{initialize_tracing, Cli};

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Mesh(#[from] vinemesh::Error),
    #[error("{0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("{0}: {1}")]
    Json(PathBuf, serde_json::Error),
}

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::Io(path.to_owned(), e))
}

fn create(path: &Path) -> Result<Box<dyn Write>, Error> {
    if path == Path::new("-") {
        return Ok(Box::new(std::io::stdout().lock()));
    }
    File::create(path)
        .map(|f| Box::new(BufWriter::new(f)) as Box<dyn Write>)
        .map_err(|e| Error::Io(path.to_owned(), e))
}

fn load_skeleton(cli: &Cli) -> Result<Skeleton, Error> {
    match (&cli.skeleton, cli.seed) {
        (Some(path), _) => {
            tracing::info!(path = %path.display(), "loading skeleton");
            Ok(Skeleton::from_json_reader(open(path)?)?)
        }
        (None, seed) => {
            let seed = seed.unwrap_or_default();
            tracing::info!(seed, budget = cli.budget, "growing random skeleton");
            Ok(Skeleton::random_seeded(seed, cli.budget))
        }
    }
}

fn load_config(cli: &Cli) -> Result<TubeConfig, Error> {
    let base = match &cli.config {
        Some(path) => {
            serde_json::from_reader(open(path)?).map_err(|e| Error::Json(path.clone(), e))?
        }
        None => TubeConfig::default(),
    };
    Ok(cli.tube_config(base))
}

fn run(cli: &Cli) -> Result<(), Error> {
    let skeleton = load_skeleton(cli)?;
    let bounds = skeleton.bounds();
    tracing::info!(
        nodes = skeleton.len(),
        total_length = skeleton.total_length(),
        max_depth = skeleton.max_depth(),
        center = ?bounds.center(),
        extents = ?bounds.extents(),
        "skeleton ready"
    );
    tracing::debug!("\n{skeleton}");

    if let Some(path) = &cli.dump_skeleton {
        let mut out = create(path)?;
        serde_json::to_writer_pretty(&mut out, &skeleton.to_records())
            .map_err(|e| Error::Json(path.clone(), e))?;
        out.flush().map_err(|e| Error::Io(path.clone(), e))?;
    }

    let config = load_config(cli)?;
    let builder = TubeBuilder::new(config).map_err(vinemesh::Error::from)?;
    let mesh: MeshBuffer = builder.build(&skeleton)?;
    tracing::info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        visible = mesh.grown_face_count(config.growth),
        growth = config.growth,
        "mesh built"
    );

    let name = cli
        .skeleton
        .as_deref()
        .and_then(Path::file_stem)
        .map_or_else(|| "sprout".to_owned(), |s| s.to_string_lossy().into_owned());
    let mut out = create(&cli.output)?;
    quadmesh::obj::write_obj(&mesh, &name, &mut out)
        .and_then(|()| out.flush())
        .map_err(|e| Error::Io(cli.output.clone(), e))?;
    tracing::info!(path = %cli.output.display(), "wrote mesh");
    Ok(())
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_filter, cli.log_format);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
