//! Removal of inherited members from child models.

use indexmap::IndexMap;

use crate::model::ModelDescriptor;
use crate::profile::ReconcileMode;

#[derive(Debug, Clone, Copy)]
pub struct ModelReconciler {
    mode: ReconcileMode,
}

impl ModelReconciler {
    pub fn new(mode: ReconcileMode) -> Self {
        Self { mode }
    }

    /// Reconcile `child` against one ancestor.
    ///
    /// `parent` is the ancestor as built, before its own reconciliation, so
    /// its properties still include everything it inherits.
    pub fn reconcile(&self, mut child: ModelDescriptor, parent: &ModelDescriptor) -> ModelDescriptor {
        if child.all_vars.is_empty() {
            child.all_vars = child.own_properties.clone();
        }
        if child.parent_name.as_deref() == Some(parent.name.as_str()) {
            child.parent_vars = parent.all_vars.clone();
        }

        let removed = match self.mode {
            ReconcileMode::None => 0,
            ReconcileMode::Properties => remove_inherited_properties(&mut child, parent),
            ReconcileMode::InlineEnums => remove_inherited_enums(&mut child, parent),
        };
        if removed > 0 {
            log::debug!(
                "removed {removed} inherited properties from {} (parent {})",
                child.name,
                parent.name
            );
            child.refresh_derived();
        }
        child
    }

    /// Reconcile `child` against every ancestor, nearest first.
    ///
    /// `models` holds the unreconciled descriptors keyed by schema name. The
    /// walk stops at a model without parent, at a parent missing from
    /// `models`, or when the chain loops.
    pub fn reconcile_hierarchy(
        &self,
        mut child: ModelDescriptor,
        models: &IndexMap<String, ModelDescriptor>,
    ) -> ModelDescriptor {
        let mut visited = vec![child.name.clone()];
        let mut next = child.parent_name.clone();

        while let Some(parent_name) = next {
            if visited.contains(&parent_name) {
                log::warn!(
                    "inheritance cycle through {parent_name} while reconciling {}",
                    child.name
                );
                break;
            }
            let Some(parent) = models.get(&parent_name) else {
                log::warn!("parent {parent_name} of {} is not a known model", child.name);
                break;
            };
            child = self.reconcile(child, parent);
            visited.push(parent_name);
            next = parent.parent_name.clone();
        }
        child
    }
}

fn remove_inherited_properties(child: &mut ModelDescriptor, parent: &ModelDescriptor) -> usize {
    if parent.own_properties.is_empty() {
        return 0;
    }
    let before = child.own_properties.len();
    child.own_properties.retain(|property| {
        !parent
            .own_properties
            .iter()
            .any(|inherited| inherited.base_name == property.base_name)
    });
    before - child.own_properties.len()
}

/// Enum identity includes the literal set, so the whole descriptor is compared.
fn remove_inherited_enums(child: &mut ModelDescriptor, parent: &ModelDescriptor) -> usize {
    if !parent.has_enums {
        return 0;
    }
    let before = child.own_properties.len();
    child.own_properties.retain(|property| {
        !(property.is_enum && parent.enum_properties().any(|inherited| inherited == property))
    });
    before - child.own_properties.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnumValue, PropertyDescriptor};

    fn property(name: &str) -> PropertyDescriptor {
        PropertyDescriptor {
            base_name: name.to_string(),
            name: name.to_string(),
            data_type: "String".to_string(),
            ..Default::default()
        }
    }

    fn model(name: &str, parent: Option<&str>, props: &[&str]) -> ModelDescriptor {
        let mut m = ModelDescriptor {
            name: name.to_string(),
            class_name: name.to_string(),
            parent_name: parent.map(str::to_string),
            own_properties: props.iter().map(|p| property(p)).collect(),
            ..Default::default()
        };
        m.all_vars = m.own_properties.clone();
        m.refresh_derived();
        m
    }

    fn own_names(model: &ModelDescriptor) -> Vec<&str> {
        model
            .own_properties
            .iter()
            .map(|p| p.base_name.as_str())
            .collect()
    }

    #[test]
    fn test_removes_parent_properties() {
        let parent = model("Pet", None, &["a", "b"]);
        let child = model("Dog", Some("Pet"), &["a", "b", "c"]);
        let reconciled = ModelReconciler::new(ReconcileMode::Properties).reconcile(child, &parent);
        assert_eq!(own_names(&reconciled), vec!["c"]);
        assert!(!reconciled.own_properties[0].has_more);
        assert_eq!(reconciled.all_vars.len(), 3);
        assert_eq!(reconciled.parent_vars.len(), 2);
    }

    #[test]
    fn test_no_removal_keeps_flags() {
        let parent = model("Pet", None, &[]);
        let child = model("Dog", Some("Pet"), &["a", "b"]);
        let reconciled = ModelReconciler::new(ReconcileMode::Properties).reconcile(child.clone(), &parent);
        assert_eq!(reconciled.own_properties, child.own_properties);
        assert!(reconciled.own_properties[0].has_more);
    }

    #[test]
    fn test_none_mode_is_noop() {
        let parent = model("Pet", None, &["a"]);
        let child = model("Dog", Some("Pet"), &["a", "b"]);
        let reconciled = ModelReconciler::new(ReconcileMode::None).reconcile(child, &parent);
        assert_eq!(own_names(&reconciled), vec!["a", "b"]);
    }

    #[test]
    fn test_three_level_chain() {
        let mut models = IndexMap::new();
        models.insert("Animal".to_string(), model("Animal", None, &["a"]));
        models.insert("Pet".to_string(), model("Pet", Some("Animal"), &["a", "b"]));
        let child = model("Dog", Some("Pet"), &["a", "b", "c"]);
        let reconciled =
            ModelReconciler::new(ReconcileMode::Properties).reconcile_hierarchy(child, &models);
        assert_eq!(own_names(&reconciled), vec!["c"]);
        assert_eq!(
            reconciled
                .parent_vars
                .iter()
                .map(|p| p.base_name.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_cycle_and_missing_parent_stop() {
        let mut models = IndexMap::new();
        models.insert("A".to_string(), model("A", Some("B"), &["x"]));
        models.insert("B".to_string(), model("B", Some("A"), &["y"]));
        let reconciler = ModelReconciler::new(ReconcileMode::Properties);
        let a = reconciler.reconcile_hierarchy(models["A"].clone(), &models);
        assert!(a.own_properties.iter().all(|p| p.base_name == "x"));

        let orphan = model("Orphan", Some("Ghost"), &["z"]);
        let reconciled = reconciler.reconcile_hierarchy(orphan, &models);
        assert_eq!(own_names(&reconciled), vec!["z"]);
    }

    #[test]
    fn test_inline_enums_need_full_equality() {
        let mut status = property("status");
        status.is_enum = true;
        status.enum_values = vec![EnumValue {
            name: "AVAILABLE".into(),
            value: "available".into(),
        }];

        let mut parent = model("Pet", None, &["name"]);
        parent.own_properties.push(status.clone());
        parent.refresh_derived();

        let mut different = status.clone();
        different.enum_values.push(EnumValue {
            name: "SOLD".into(),
            value: "sold".into(),
        });

        let mut same_child = model("Dog", Some("Pet"), &["name"]);
        same_child.own_properties.push(status);
        same_child.refresh_derived();

        let mut other_child = model("Cat", Some("Pet"), &["name"]);
        other_child.own_properties.push(different);
        other_child.refresh_derived();

        let reconciler = ModelReconciler::new(ReconcileMode::InlineEnums);
        let dog = reconciler.reconcile(same_child, &parent);
        assert_eq!(own_names(&dog), vec!["name"]);
        assert!(!dog.has_enums);

        let cat = reconciler.reconcile(other_child, &parent);
        assert_eq!(own_names(&cat), vec!["name", "status"]);
    }
}
