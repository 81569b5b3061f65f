// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping a host's shadow background in sync with its size.

use crate::ShadowRenderer;
use log::debug;
use shadow_common::config::ShadowConfig;
use shadow_common::pixmap::Pixmap;
use shadow_common::Result;

/// Owns the shadow background of a host view and decides when to re-render it.
///
/// The host forwards its size and layout notifications; each hook returns whether a new
/// background was installed. A failed render leaves the previous background in place.
#[derive(Debug)]
pub struct ShadowHost<R> {
    config: ShadowConfig,
    renderer: R,
    background: Option<Pixmap>,
    invalidate_on_size_changed: bool,
    force: bool,
}

impl<R: ShadowRenderer> ShadowHost<R> {
    /// Create a host without a background, re-rendering on every size change.
    pub fn new(config: ShadowConfig, renderer: R) -> Self {
        Self {
            config,
            renderer,
            background: None,
            invalidate_on_size_changed: true,
            force: false,
        }
    }

    /// Whether a size change alone re-renders an existing background.
    ///
    /// Hosts that resize often by small amounts can turn this off and call
    /// [`invalidate_shadow`](Self::invalidate_shadow) when the shadow must catch up.
    pub fn set_invalidate_on_size_changed(&mut self, invalidate: bool) {
        self.invalidate_on_size_changed = invalidate;
    }

    pub fn invalidate_on_size_changed(&self) -> bool {
        self.invalidate_on_size_changed
    }

    /// Called when the host's size changes.
    pub fn on_size_changed(&mut self, width: u32, height: u32) -> Result<bool> {
        let stale = self.background.is_none() || self.invalidate_on_size_changed || self.force;
        if width == 0 || height == 0 || !stale {
            return Ok(false);
        }
        self.force = false;
        self.rerender(width, height)
    }

    /// Called after the host has been laid out at the given size.
    pub fn on_layout(&mut self, width: u32, height: u32) -> Result<bool> {
        if !self.force {
            return Ok(false);
        }
        self.force = false;
        self.rerender(width, height)
    }

    /// Re-render at the next size change or layout, regardless of policy.
    pub fn invalidate_shadow(&mut self) {
        self.force = true;
    }

    /// Replace the config; the shadow is re-rendered at the next size change or layout.
    pub fn set_config(&mut self, config: ShadowConfig) {
        self.config = config;
        self.invalidate_shadow();
    }

    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// The installed background, if any.
    pub fn background(&self) -> Option<&Pixmap> {
        self.background.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn rerender(&mut self, width: u32, height: u32) -> Result<bool> {
        debug!("Re-rendering shadow background at {width}x{height}.");
        let pixmap = self.renderer.render(&self.config, width, height)?;
        self.background = Some(pixmap);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadow_common::peniko::Color;
    use shadow_common::Error;

    /// Counts renders and fails for sizes wider than `max_width`.
    #[derive(Debug, Default)]
    struct CountingRenderer {
        renders: usize,
        max_width: Option<u32>,
    }

    impl ShadowRenderer for CountingRenderer {
        fn render(&mut self, _: &ShadowConfig, width: u32, height: u32) -> Result<Pixmap> {
            if self.max_width.is_some_and(|max| width > max) {
                return Err(Error::Allocation { width, height });
            }
            self.renders += 1;
            Pixmap::new(width, height)
        }
    }

    fn host(max_width: Option<u32>) -> ShadowHost<CountingRenderer> {
        let config = ShadowConfig::new(4.0, 4.0, Color::BLACK).unwrap();
        ShadowHost::new(
            config,
            CountingRenderer {
                renders: 0,
                max_width,
            },
        )
    }

    #[test]
    fn renders_on_every_size_change_by_default() {
        let mut host = host(None);
        assert!(host.on_size_changed(10, 10).unwrap());
        assert!(host.on_size_changed(12, 10).unwrap());
        assert_eq!(host.renderer().renders, 2);
        assert_eq!(host.background().unwrap().width(), 12);
    }

    #[test]
    fn zero_size_is_skipped() {
        let mut host = host(None);
        assert!(!host.on_size_changed(0, 10).unwrap());
        assert!(host.background().is_none());
    }

    #[test]
    fn policy_off_keeps_background_until_invalidated() {
        let mut host = host(None);
        host.set_invalidate_on_size_changed(false);

        // The first size change always renders, there is no background yet.
        assert!(host.on_size_changed(10, 10).unwrap());
        assert!(!host.on_size_changed(20, 20).unwrap());
        assert!(!host.on_layout(20, 20).unwrap());
        assert_eq!(host.renderer().renders, 1);

        host.invalidate_shadow();
        assert!(host.on_layout(20, 20).unwrap());
        assert!(!host.on_layout(20, 20).unwrap());
        assert_eq!(host.background().unwrap().width(), 20);
    }

    #[test]
    fn set_config_forces_rerender() {
        let mut host = host(None);
        host.set_invalidate_on_size_changed(false);
        host.on_size_changed(10, 10).unwrap();

        let config = ShadowConfig::new(2.0, 6.0, Color::BLACK).unwrap();
        host.set_config(config);
        assert!(host.on_size_changed(10, 10).unwrap());
        assert_eq!(host.config().blur_radius(), 6.0);
        assert_eq!(host.renderer().renders, 2);
    }

    #[test]
    fn failed_render_keeps_previous_background() {
        let mut host = host(Some(50));
        host.on_size_changed(40, 10).unwrap();

        assert_eq!(
            host.on_size_changed(60, 10),
            Err(Error::Allocation {
                width: 60,
                height: 10
            })
        );
        assert_eq!(host.background().unwrap().width(), 40);
    }
}
