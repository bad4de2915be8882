// cubes-mod: Cubes Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ToolContext;
use crate::config::Config;
use crate::config::types::DexBackend;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn context(dry_run: bool) -> (ToolContext, CancellationToken) {
    let mut config = Config::default();
    config.tools.dex_backend = DexBackend::Dx;
    let token = CancellationToken::new();
    (ToolContext::new(Arc::new(config), token.clone(), dry_run), token)
}

#[test]
fn test_tool_context_exposes_tool_settings() {
    let (ctx, _) = context(false);

    assert!(!ctx.is_dry_run());
    assert_eq!(ctx.config().tools.dex_backend, DexBackend::Dx);
    assert_eq!(ctx.config().tools.java_release, 17);
}

#[test]
fn test_clones_share_cancellation() {
    let (ctx, token) = context(true);
    let clone = ctx.clone();

    assert!(clone.is_dry_run());
    assert!(Arc::ptr_eq(ctx.config(), clone.config()));

    token.cancel();
    assert!(ctx.is_cancelled());
    assert!(clone.cancel_token().is_cancelled());
}
