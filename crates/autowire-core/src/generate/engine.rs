use super::{Binding, Collected, UnmappedOption};
use crate::config::GenerateOptions;
use crate::filter::NameFilter;
use crate::introspect::{
    candidates_for, collect_setters, find_doc, is_complex_user_type, sanitize_description,
};
use crate::mapping::MappingTable;
use crate::naming::camel_to_dash;
use crate::registry::{DocLookup, TypeRegistry};
use crate::selector::{CandidateSelector, Selection};
use autowire_meta::{
    ComponentCatalog, ComponentModel, ComponentOption, GroupDescriptor, MethodInfo,
    PropertyDescriptor, TypeInfo,
};

/// Scans a component catalog against a type registry.
pub struct Generator<'a> {
    registry: &'a dyn TypeRegistry,
    docs: Option<&'a dyn DocLookup>,
    options: &'a GenerateOptions,
    selector: CandidateSelector<'a>,
    filter: NameFilter,
}

impl<'a> Generator<'a> {
    pub fn new(
        registry: &'a dyn TypeRegistry,
        options: &'a GenerateOptions,
        mapping: &'a MappingTable,
    ) -> Self {
        Self {
            registry,
            docs: None,
            options,
            selector: CandidateSelector::new(mapping, options.log_unmapped),
            filter: NameFilter::new(&options.key_prefix, &options.exclude, &options.include),
        }
    }

    /// Use `docs` for descriptions of discovered setters.
    ///
    /// Ignored when doc lookup is disabled in the options.
    pub fn with_docs(mut self, docs: &'a dyn DocLookup) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Visit every option of every component.
    pub fn scan(&self, catalog: &ComponentCatalog) -> Collected {
        let mut out = Collected::default();
        for component in &catalog.components {
            for option in &component.options {
                self.visit_option(component, option, &mut out);
            }
        }
        tracing::debug!(
            bindings = out.bindings.len(),
            properties = out.properties.len(),
            groups = out.groups.len(),
            unmapped = out.unmapped.len(),
            "Scan complete"
        );
        out
    }

    fn visit_option(
        &self,
        component: &ComponentModel,
        option: &ComponentOption,
        out: &mut Collected,
    ) {
        let group = format!("{}.{}", self.options.key_prefix, component.name);
        let key = format!("{group}.{}", camel_to_dash(&option.name));

        if self.options.metadata_enabled {
            tracing::debug!(%key, "Metadata option");
            out.properties.push(PropertyDescriptor {
                name: key.clone(),
                java_type: option.java_type.clone(),
                description: option.description.clone(),
                source_type: component.java_type.clone(),
                default_value: option.default_value.clone(),
                deprecated: option.deprecated,
            });
            out.groups.push(GroupDescriptor {
                name: group,
                description: component.description.clone(),
                source_type: component.java_type.clone(),
            });
        }

        if !self.options.autowire_enabled || !option.is_object() {
            return;
        }
        if !self.filter.is_eligible(&component.name, &option.name) {
            tracing::debug!(option = %option.name, "Skipping property name");
            return;
        }

        let interface = match self.registry.load_type(&option.java_type) {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(option = %option.name, error = %e, "Cannot load type");
                return;
            }
        };
        if !interface.is_interface()
            || !is_complex_user_type(&interface, &self.options.platform_namespaces)
        {
            return;
        }

        let candidates = candidates_for(self.registry, &interface, &self.options.own_namespaces);
        let selection = self.selector.select_best(
            &component.name,
            &option.name,
            &interface.name,
            &candidates,
        );
        match selection {
            Selection::Selected { candidate, kind } => {
                let binding = Binding {
                    key,
                    target: candidate.name,
                    kind,
                };
                tracing::debug!(%binding, "Autowire");
                if self.options.metadata_enabled {
                    self.push_setter_properties(&binding, out);
                }
                out.bindings.push(binding);
            }
            Selection::Ambiguous(names) => {
                report_ambiguous(&key, &interface.name, &names);
                out.unmapped.push(UnmappedOption {
                    key,
                    interface: interface.name,
                    candidates: names,
                });
            }
            Selection::None => {}
        }
    }

    /// One property per setter of the winning implementation.
    fn push_setter_properties(&self, binding: &Binding, out: &mut Collected) {
        let winner = match self.registry.load_type(&binding.target) {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(winner = %binding.target, error = %e, "Cannot load winner");
                return;
            }
        };

        for setter in collect_setters(self.registry, &winner) {
            let Some(shorthand) = setter.setter_shorthand() else {
                continue;
            };
            let key = format!("{}.{}", binding.key, camel_to_dash(&shorthand));
            tracing::debug!(%key, "Metadata option");
            out.properties.push(PropertyDescriptor {
                name: key,
                java_type: setter.parameters[0].clone(),
                description: self.setter_description(&winner, &setter),
                source_type: winner.name.clone(),
                default_value: None,
                deprecated: setter.deprecated,
            });
        }
    }

    fn setter_description(&self, winner: &TypeInfo, setter: &MethodInfo) -> String {
        let doc = self
            .docs
            .filter(|_| self.options.doc_lookup_enabled)
            .and_then(|docs| find_doc(self.registry, docs, winner, &setter.name))
            .and_then(|doc| sanitize_description(&doc));

        let mut description = match doc {
            Some(text) if text.ends_with('.') => text + " ",
            Some(text) => text + ". ",
            None => String::new(),
        };
        description.push_str(&format!(
            "Auto discovered option from class: {} to set the option via setter: {}",
            winner.name, setter.name
        ));
        description
    }
}

/// Log the competing implementations of an unbound option. `names` is empty
/// unless unmapped reporting is enabled.
fn report_ambiguous(key: &str, interface: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    tracing::info!(
        "Cannot autowire option {key} as the interface: {interface} has {} implementations in the classpath:",
        names.len()
    );
    for name in names {
        tracing::info!("\t\t{name}");
    }
}
