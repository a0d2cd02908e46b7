use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use pdf_album::{AlbumSession, DocumentMetadata, MediaType, SlotId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfalbum", about = "Bundle ordered images into a single PDF", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images into a multi-page PDF, one page per image
    Convert {
        /// Input image file(s), in selection order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file (default: "<title>.pdf" in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Document title (default: "Converted PDF")
        #[arg(long)]
        title: Option<String>,

        /// Document author
        #[arg(long)]
        author: Option<String>,

        /// Document subject
        #[arg(long)]
        subject: Option<String>,

        /// Document keywords (stored as one raw string)
        #[arg(long)]
        keywords: Option<String>,

        /// Metadata JSON file; individual flags override its fields
        #[arg(long)]
        metadata: Option<PathBuf>,

        /// Page order as comma-separated selection indices, e.g. 2,0,1
        #[arg(long, value_delimiter = ',')]
        order: Option<Vec<usize>>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            title,
            author,
            subject,
            keywords,
            metadata,
            order,
        } => {
            for path in &input {
                if MediaType::from_path(path).is_none() {
                    bail!("{} is not an image file", path.display());
                }
            }

            let mut meta = match metadata {
                Some(path) => DocumentMetadata::load(&path).await?,
                None => DocumentMetadata::default(),
            };
            if let Some(title) = title {
                meta.title = title;
            }
            if let Some(author) = author {
                meta.author = author;
            }
            if let Some(subject) = subject {
                meta.subject = subject;
            }
            if let Some(keywords) = keywords {
                meta.keywords = keywords;
            }

            let images = pdf_album::load_images(&input).await?;
            let mut session = AlbumSession::new();
            session.replace_selection(images);

            if let Some(order) = order {
                let slots: Vec<SlotId> = order.into_iter().map(SlotId).collect();
                session.sync_order(&slots)?;
            }

            let assembly = pdf_album::assemble(&session.ordered_images(), &meta).await?;

            for skip in &assembly.skipped {
                eprintln!(
                    "Warning: skipped {} (unsupported format {})",
                    skip.name,
                    skip.media_type.mime()
                );
            }

            let output = output
                .unwrap_or_else(|| PathBuf::from(assembly.document.metadata.file_name()));
            pdf_album::save_document(&assembly.document, &output).await?;

            println!(
                "Assembled {} page(s) → {}",
                assembly.document.page_count(),
                output.display()
            );
        }
    }

    Ok(())
}
