//! Property binder: the per-owner binding list, its lifecycle and the per-tick dispatch.
//!
//! A `PropertyBinder` never owns its binders or its effect. Binders live in the host's
//! `BinderStore` and the effect is reached through an `EffectHost`, so the host drives
//! everything explicitly:
//!
//! - `enable` resolves the target effect for the owner.
//! - `reset` re-resolves the target and rebuilds the list from the owner's binders.
//! - `disable` drops the target handle.
//! - `tick` runs every valid binder once against the current target.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::binder::{Binder, BinderKind};
use crate::config::BinderSetup;
use crate::diagnostics::{BindingDiagnostic, DiagnosticsCfg, TickReport};
use crate::effect::{EffectHandle, EffectHost, EffectTarget};
use crate::error::StoreError;
use crate::ids::{BinderId, OwnerId};
use crate::scene::SceneValues;
use crate::store::BinderStore;

/// Whether the host is running interactively or only previewing (editor, thumbnail).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostMode {
    #[default]
    Play,
    Preview,
}

/// Per-tick inputs shared by every binder.
#[derive(Copy, Clone, Debug)]
pub struct TickContext<'a> {
    pub mode: HostMode,
    pub scene: &'a SceneValues,
}

impl<'a> TickContext<'a> {
    pub fn play(scene: &'a SceneValues) -> Self {
        Self {
            mode: HostMode::Play,
            scene,
        }
    }

    pub fn preview(scene: &'a SceneValues) -> Self {
        Self {
            mode: HostMode::Preview,
            scene,
        }
    }
}

fn default_execute_in_preview() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyBinder {
    /// Display name of the owner, used in diagnostics.
    pub name: String,
    pub owner: OwnerId,
    #[serde(default = "default_execute_in_preview")]
    pub execute_in_preview: bool,
    #[serde(default)]
    pub diagnostics: DiagnosticsCfg,
    /// Ordered binding list. May hold ids of binders that no longer exist.
    #[serde(default)]
    bindings: Vec<BinderId>,
    /// Resolved target; never serialized, re-resolved by `enable`/`reset`.
    #[serde(skip)]
    target: Option<EffectHandle>,
}

impl PropertyBinder {
    pub fn new(owner: OwnerId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner,
            execute_in_preview: default_execute_in_preview(),
            diagnostics: DiagnosticsCfg::default(),
            bindings: Vec::new(),
            target: None,
        }
    }

    /// Build a binder for `owner` from a setup, inserting its binders into `store`.
    pub fn from_setup(
        owner: OwnerId,
        setup: BinderSetup,
        store: &mut BinderStore,
    ) -> Result<Self, StoreError> {
        let mut pb = Self::new(owner, setup.name);
        pb.execute_in_preview = setup.execute_in_preview;
        pb.diagnostics = setup.diagnostics;
        for binder in setup.binders {
            pb.add_binder(store, binder)?;
        }
        Ok(pb)
    }

    pub fn bindings(&self) -> &[BinderId] {
        &self.bindings
    }

    pub fn target(&self) -> Option<EffectHandle> {
        self.target
    }

    // --- Lifecycle ---------------------------------------------------------

    /// Resolve the target effect of the owner. Returns the resolved handle.
    pub fn enable<H: EffectHost + ?Sized>(&mut self, host: &H) -> Option<EffectHandle> {
        self.target = host.resolve(self.owner);
        if self.target.is_none() {
            debug!(binder = %self.name, "no effect attached to owner");
        }
        self.target
    }

    /// Drop the target handle. Ticks report `target_missing` until the next
    /// `enable`/`reset`.
    pub fn disable(&mut self) {
        if self.target.take().is_some() {
            debug!(binder = %self.name, "effect detached");
        }
    }

    /// Re-resolve the target and rebuild the binding list from the owner's binders.
    /// Stale ids are dropped.
    pub fn reset<H: EffectHost + ?Sized>(&mut self, store: &BinderStore, host: &H) {
        self.enable(host);
        self.bindings = store.binders_of(self.owner);
        debug!(binder = %self.name, count = self.bindings.len(), "binding list rebuilt");
    }

    // --- Tick --------------------------------------------------------------

    fn suppressed(&self, mode: HostMode) -> bool {
        !self.execute_in_preview && mode == HostMode::Preview
    }

    /// Resolve the current target through `host` and dispatch every binder against it.
    pub fn tick<H: EffectHost + ?Sized>(
        &self,
        ctx: &TickContext<'_>,
        store: &mut BinderStore,
        host: &mut H,
    ) -> TickReport {
        if self.suppressed(ctx.mode) {
            return TickReport::skipped();
        }
        let resolved = match self.target {
            Some(handle) => host.effect_mut(handle),
            None => None,
        };
        let Some(target) = resolved else {
            debug!(binder = %self.name, "tick without a resolved effect");
            return TickReport {
                target_missing: true,
                ..TickReport::default()
            };
        };
        self.run(ctx, store, target)
    }

    /// Dispatch every binder against an explicit target.
    pub fn dispatch(
        &self,
        ctx: &TickContext<'_>,
        store: &mut BinderStore,
        target: &mut dyn EffectTarget,
    ) -> TickReport {
        if self.suppressed(ctx.mode) {
            return TickReport::skipped();
        }
        self.run(ctx, store, target)
    }

    fn run(
        &self,
        ctx: &TickContext<'_>,
        store: &mut BinderStore,
        target: &mut dyn EffectTarget,
    ) -> TickReport {
        let mut report = TickReport::default();

        for (index, &id) in self.bindings.iter().enumerate() {
            let binder = match store.owner_of(id) {
                Some(owner) if owner == self.owner => store.get_mut(id),
                _ => None,
            };
            let Some(binder) = binder else {
                let diagnostic = BindingDiagnostic::MissingBinder {
                    index,
                    owner: self.name.clone(),
                };
                if self.diagnostics.log_missing {
                    warn!("{diagnostic}");
                }
                report.diagnostics.push(diagnostic);
                continue;
            };

            if !binder.is_valid(ctx.scene, &*target) {
                report.invalid.push(id);
                continue;
            }

            match binder.update(ctx.scene, &mut *target) {
                Ok(()) => report.updated.push(id),
                Err(err) => {
                    let diagnostic = BindingDiagnostic::UpdateFailed {
                        index,
                        binder: id,
                        error: err.to_string(),
                    };
                    if self.diagnostics.log_failures {
                        warn!(binder = %self.name, "{diagnostic}");
                    }
                    report.diagnostics.push(diagnostic);
                }
            }
        }

        report
    }

    // --- Registry ----------------------------------------------------------

    fn owned<'s>(&self, store: &'s BinderStore, id: BinderId) -> Option<&'s Binder> {
        if store.owner_of(id) == Some(self.owner) {
            store.get(id)
        } else {
            None
        }
    }

    /// Insert a binder for this owner and append it to the binding list.
    pub fn add_binder(
        &mut self,
        store: &mut BinderStore,
        binder: impl Into<Binder>,
    ) -> Result<BinderId, StoreError> {
        let id = store.insert(self.owner, binder.into())?;
        self.bindings.push(id);
        Ok(id)
    }

    /// Destroy every binder of this owner. Returns how many were destroyed.
    pub fn clear_binders(&mut self, store: &mut BinderStore) -> usize {
        self.bindings.clear();
        store.destroy_owner(self.owner)
    }

    /// Destroy one binder. Binders owned by another entity are left alone.
    pub fn remove_binder(&mut self, store: &mut BinderStore, id: BinderId) -> bool {
        if store.owner_of(id) != Some(self.owner) {
            return false;
        }
        store.destroy(id);
        self.bindings.retain(|b| *b != id);
        true
    }

    /// Destroy every binder of this owner with the given kind.
    pub fn remove_binders_of_kind(&mut self, store: &mut BinderStore, kind: BinderKind) -> usize {
        let doomed: HashSet<BinderId> = store
            .binders_of(self.owner)
            .into_iter()
            .filter(|id| store.get(*id).is_some_and(|b| b.kind() == kind))
            .collect();
        for id in &doomed {
            store.destroy(*id);
        }
        self.bindings.retain(|id| !doomed.contains(id));
        doomed.len()
    }

    /// Binders of the given kind, in binding-list order.
    pub fn binders_of_kind<'s>(
        &'s self,
        store: &'s BinderStore,
        kind: BinderKind,
    ) -> impl Iterator<Item = (BinderId, &'s Binder)> + 's {
        self.bindings.iter().filter_map(move |&id| {
            self.owned(store, id)
                .filter(|b| b.kind() == kind)
                .map(|b| (id, b))
        })
    }
}
