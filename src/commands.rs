use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::{resolve_output, FormatArgs, ScanArgs};
use crate::config::Config;
use crate::detector::SensitiveInfoDetector;
use crate::envelope::{AdviceResponse, CODE_IMAGE_DIRECT};
use crate::error::Result;
use crate::findings::parse_model_reply;
use crate::formatter::{self, Block};
use crate::render::render;
use crate::report;

/// Read `path`, or all of stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Format either a raw message or, with `envelope`, the `message` field of a
/// backend JSON reply. Error replies are formatted too.
pub fn message_blocks(input: &str, envelope: bool) -> Result<Vec<Block>> {
    if !envelope {
        return Ok(formatter::format(input));
    }
    let reply = AdviceResponse::from_json(input)?;
    if reply.is_error() {
        warn!(code = reply.code, "backend reply reports an error");
    } else if reply.code == CODE_IMAGE_DIRECT {
        info!("image had no extractable text and was analyzed directly");
    }
    Ok(formatter::format(&reply.into_message()))
}

pub fn run_format(args: &FormatArgs, config: &Config, input: &str) -> Result<String> {
    let (format, opts) = resolve_output(&args.render, config)?;
    let blocks = message_blocks(input, args.envelope)?;
    log_blocks(&blocks);
    render(&blocks, format, &opts)
}

fn log_blocks(blocks: &[Block]) {
    for (idx, block) in blocks.iter().enumerate() {
        debug!(idx, kind = block.kind(), "formatted block");
    }
}

/// Scan with every detector unless `--only` narrows it.
pub fn detector_for(args: &ScanArgs) -> SensitiveInfoDetector {
    if args.only.is_empty() {
        SensitiveInfoDetector::new()
    } else {
        SensitiveInfoDetector::with_kinds(&args.only)
    }
}

/// Compose the advice message for `input`, merging in findings from the
/// saved model reply when one is given.
pub fn advice_message(args: &ScanArgs, input: &str) -> Result<String> {
    let detector = detector_for(args);
    debug!(kinds = ?detector.kinds(), "scanning input");
    let local = detector.detect(input);
    let model = match &args.model_reply {
        Some(path) => parse_model_reply(&std::fs::read_to_string(path)?),
        None => Vec::new(),
    };
    info!(
        local = local.len(),
        model = model.len(),
        "collected sensitive information findings"
    );
    let findings = report::combine(&local, &model);
    Ok(report::compose(&findings, args.content_kind()))
}

pub fn run_scan(args: &ScanArgs, config: &Config, input: &str) -> Result<String> {
    let (format, opts) = resolve_output(&args.render, config)?;
    let message = advice_message(args, input)?;
    let blocks = formatter::format(&message);
    log_blocks(&blocks);
    render(&blocks, format, &opts)
}
