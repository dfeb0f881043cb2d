// Bootgen
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Generic registration writer
//!
//! Emits a `context.registerBean(...)` call whose instance supplier invokes the
//! constructor or factory method directly, resolving arguments from explicit
//! values, well-known context objects or autowiring. Members that generated
//! code cannot reach are invoked reflectively and recorded in the registry.

use super::{ContainerAware, InstanceDescriptor, RegistrationWriter, RegistrationWriterSupplier};
use crate::code::{Code, CodeArg, CodeBlock, MethodSpec, Modifier};
use crate::config::is_identifier;
use crate::context::BootstrapWriterContext;
use crate::error::{GenerationError, GeneratorResult};
use crate::names;
use bootgen_core::types::system::setter_name;
use bootgen_core::types::{ExecutableRef, TypeKind, TypeName, TypeSystem};
use bootgen_core::{ArgumentValue, ComponentDefinition, Container, InstanceSource, PropertyValue, Role, Scope};
use std::sync::Arc;
use tracing::debug;

const OBJECT: &str = "java.lang.Object";
const STRING: &str = "java.lang.String";

/// Fallback supplier accepting any definition with a declared type
#[derive(Default)]
pub struct DefaultRegistrationWriterSupplier {
    container: Option<Arc<dyn Container>>,
}

impl DefaultRegistrationWriterSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(container: Arc<dyn Container>) -> Self {
        Self { container: Some(container) }
    }
}

impl ContainerAware for DefaultRegistrationWriterSupplier {
    fn set_container(&mut self, container: Arc<dyn Container>) {
        self.container = Some(container);
    }
}

impl RegistrationWriterSupplier for DefaultRegistrationWriterSupplier {
    fn get(&self, name: &str, definition: &ComponentDefinition) -> Option<Box<dyn RegistrationWriter>> {
        let container = self.container.as_ref()?;
        definition.bean_class.as_ref()?;
        Some(Box::new(DefaultRegistrationWriter::new(name, definition.clone(), Arc::clone(container))))
    }

    fn name(&self) -> &str {
        "default"
    }

    fn as_container_aware(&mut self) -> Option<&mut dyn ContainerAware> {
        Some(self)
    }
}

/// Writes one `registerBean` call for a component
pub struct DefaultRegistrationWriter {
    name: String,
    definition: ComponentDefinition,
    container: Arc<dyn Container>,
    bean_type: TypeName,
    produced_type: TypeName,
    setters: Vec<ExecutableRef>,
    descriptor: InstanceDescriptor,
    problems: Vec<String>,
}

impl DefaultRegistrationWriter {
    pub fn new(name: &str, definition: ComponentDefinition, container: Arc<dyn Container>) -> Self {
        let bean_type = definition.bean_class.clone().unwrap_or_else(|| TypeName::new(OBJECT));
        let produced_type = container.produced_type(&definition).unwrap_or_else(|| bean_type.clone());
        let types = container.type_system();

        let mut problems = Vec::new();
        let mut descriptor = InstanceDescriptor::new(name, produced_type.clone());
        match resolve_instance_creator(container.as_ref(), &definition, &bean_type) {
            Some(creator) => {
                if let Some(index) = definition.constructor_arguments.keys().find(|index| **index >= creator.parameter_count()) {
                    problems.push(format!("argument index {} is out of range for {}", index, creator));
                }
                descriptor = descriptor.with_instance_creator(creator);
            }
            None => problems.push(format!("no unique constructor found on {}", bean_type)),
        }

        let mut setters = Vec::new();
        for property in &definition.property_values {
            match resolve_setter(container.as_ref(), &produced_type, property) {
                Some(setter) => {
                    descriptor = descriptor.with_injection_point(&property.name, setter.clone(), true);
                    setters.push(setter);
                }
                None => problems.push(format!("no setter found for property '{}' on {}", property.name, produced_type)),
            }
        }

        if let Some(init) = &definition.init_method {
            match resolve_lifecycle_method(types, &produced_type, init) {
                Some(method) => descriptor = descriptor.with_init_method(method),
                None => problems.push(format!("init method '{}' not found on {}", init, produced_type)),
            }
        }
        if let Some(destroy) = &definition.destroy_method {
            match resolve_lifecycle_method(types, &produced_type, destroy) {
                Some(method) => descriptor = descriptor.with_destroy_method(method),
                None => problems.push(format!("destroy method '{}' not found on {}", destroy, produced_type)),
            }
        }

        Self { name: name.to_string(), definition, container, bean_type, produced_type, setters, descriptor, problems }
    }

    fn types(&self) -> &TypeSystem {
        self.container.type_system()
    }

    /// Package the registration must live in to see non-public types
    fn target_package(&self, main_package: &str) -> String {
        [&self.bean_type, &self.produced_type]
            .into_iter()
            .find(|ty| !self.types().visibility(ty).is_public())
            .map(|ty| ty.package_name().to_string())
            .unwrap_or_else(|| main_package.to_string())
    }

    fn write_registration_code(&self, context: &mut BootstrapWriterContext, package: &str, creator: &ExecutableRef, code: &mut CodeBlock) -> GeneratorResult<()> {
        let instance = self.instance_expression(context, package, creator)?;
        let customizers = self.customizer_statements();
        let name = CodeArg::string(&self.name);
        let produced = CodeArg::ty(self.produced_type.clone());

        if self.definition.property_values.is_empty() {
            if customizers.is_empty() {
                code.add_statement("context.registerBean($S, $T.class, () -> $L)", [name, produced, CodeArg::code(instance)]);
                return Ok(());
            }
            code.begin_control_flow("context.registerBean($S, $T.class, () -> $L, (definition) ->", [name, produced, CodeArg::code(instance)]);
        } else {
            code.begin_control_flow("context.registerBean($S, $T.class, () ->", [name, produced]);
            code.add_statement("$T bean = $L", [CodeArg::ty(self.produced_type.clone()), CodeArg::code(instance)]);
            for (property, setter) in self.definition.property_values.iter().zip(&self.setters) {
                let statement = self.property_statement(context, package, property, setter)?;
                code.add_statement_code(statement);
            }
            code.add_statement("return bean", []);
            if !customizers.is_empty() {
                code.next_control_flow(", (definition) ->", []);
            }
        }
        for customizer in customizers {
            code.add_statement_code(customizer);
        }
        code.end_control_flow_with(")", []);
        Ok(())
    }

    fn instance_expression(&self, context: &mut BootstrapWriterContext, package: &str, creator: &ExecutableRef) -> GeneratorResult<Code> {
        let arguments = self.argument_codes(creator)?;
        let accessible = self.types().is_accessible(creator, package);
        if !accessible {
            debug!(component = %self.name, creator = %creator, "Instance creator is not accessible, using reflection");
            let creator = creator.clone();
            context.describe_reflection(|reflection| {
                reflection.add_executable(creator);
            });
        }

        let declaring = CodeArg::ty(creator.declaring_type().clone());
        let parameter_classes = Code::join(creator.parameter_types().iter().map(|p| Code::of(", $T.class", [CodeArg::ty(p.clone())])), "");
        let trailing_arguments = Code::join(arguments.iter().cloned().map(|a| Code::of(", $L", [CodeArg::code(a)])), "");
        let arguments = Code::join(arguments, ", ");

        let code = match &self.definition.instance_source {
            Some(InstanceSource::FactoryMethod { factory_component, method }) if accessible => Code::of(
                "context.getBean($S, $T.class).$N($L)",
                [CodeArg::string(factory_component), declaring, CodeArg::name(method.name()), CodeArg::code(arguments)],
            ),
            Some(InstanceSource::FactoryMethod { factory_component, method }) => Code::of(
                "($T) $T.invokeMethod($T.findMethod($T.class, $S$L), context.getBean($S)$L)",
                [
                    CodeArg::ty(self.produced_type.clone()),
                    CodeArg::ty(names::REFLECTION_UTILS),
                    CodeArg::ty(names::REFLECTION_UTILS),
                    declaring,
                    CodeArg::string(method.name()),
                    CodeArg::code(parameter_classes),
                    CodeArg::string(factory_component),
                    CodeArg::code(trailing_arguments),
                ],
            ),
            Some(InstanceSource::StaticFactoryMethod(method)) if accessible => Code::of("$T.$N($L)", [declaring, CodeArg::name(method.name()), CodeArg::code(arguments)]),
            Some(InstanceSource::StaticFactoryMethod(method)) => Code::of(
                "($T) $T.invokeMethod($T.findMethod($T.class, $S$L), null$L)",
                [
                    CodeArg::ty(self.produced_type.clone()),
                    CodeArg::ty(names::REFLECTION_UTILS),
                    CodeArg::ty(names::REFLECTION_UTILS),
                    declaring,
                    CodeArg::string(method.name()),
                    CodeArg::code(parameter_classes),
                    CodeArg::code(trailing_arguments),
                ],
            ),
            _ if accessible => Code::of("new $T($L)", [declaring, CodeArg::code(arguments)]),
            _ => Code::of(
                "$T.instantiateClass($T.accessibleConstructor($T.class$L)$L)",
                [CodeArg::ty(names::BEAN_UTILS), CodeArg::ty(names::REFLECTION_UTILS), declaring, CodeArg::code(parameter_classes), CodeArg::code(trailing_arguments)],
            ),
        };
        Ok(code)
    }

    fn argument_codes(&self, creator: &ExecutableRef) -> GeneratorResult<Vec<Code>> {
        creator
            .parameter_types()
            .iter()
            .enumerate()
            .map(|(index, parameter)| match self.definition.constructor_arguments.get(&index) {
                Some(ArgumentValue::Reference(component)) => Ok(Code::of("context.getBean($S, $T.class)", [CodeArg::string(component), CodeArg::ty(parameter.clone())])),
                Some(ArgumentValue::Literal(value)) => {
                    literal_code(self.types(), value, parameter).map_err(|reason| GenerationError::writer_failed(&self.name, format!("argument {}: {}", index, reason)))
                }
                None => Ok(self.autowire_code(parameter)),
            })
            .collect()
    }

    fn autowire_code(&self, parameter: &TypeName) -> Code {
        if names::ENVIRONMENT_TYPES.contains(&parameter.as_str()) {
            return Code::text("context.getEnvironment()");
        }
        if names::CONTEXT_TYPES.contains(&parameter.as_str()) {
            return Code::text("context");
        }
        let candidates: Vec<String> = self.container.names_for_type(parameter).into_iter().filter(|candidate| *candidate != self.name).collect();
        match candidates.as_slice() {
            [single] => Code::of("context.getBean($S, $T.class)", [CodeArg::string(single), CodeArg::ty(parameter.clone())]),
            _ => Code::of("context.getBean($T.class)", [CodeArg::ty(parameter.clone())]),
        }
    }

    fn property_statement(&self, context: &mut BootstrapWriterContext, package: &str, property: &PropertyValue, setter: &ExecutableRef) -> GeneratorResult<Code> {
        let parameter = setter.parameter_types().first().cloned().unwrap_or_else(|| TypeName::new(OBJECT));
        let value = match &property.value {
            ArgumentValue::Reference(component) => Code::of("context.getBean($S, $T.class)", [CodeArg::string(component), CodeArg::ty(parameter.clone())]),
            ArgumentValue::Literal(value) => {
                literal_code(self.types(), value, &parameter).map_err(|reason| GenerationError::writer_failed(&self.name, format!("property '{}': {}", property.name, reason)))?
            }
        };
        if self.types().is_accessible(setter, package) {
            return Ok(Code::of("bean.$N($L)", [CodeArg::name(setter.name()), CodeArg::code(value)]));
        }

        let recorded = setter.clone();
        context.describe_reflection(|reflection| {
            reflection.add_executable(recorded);
        });
        Ok(Code::of(
            "$T.invokeMethod($T.findMethod($T.class, $S, $T.class), bean, $L)",
            [
                CodeArg::ty(names::REFLECTION_UTILS),
                CodeArg::ty(names::REFLECTION_UTILS),
                CodeArg::ty(setter.declaring_type().clone()),
                CodeArg::string(setter.name()),
                CodeArg::ty(parameter),
                CodeArg::code(value),
            ],
        ))
    }

    fn customizer_statements(&self) -> Vec<Code> {
        let definition = &self.definition;
        let mut statements = Vec::new();
        let scope = definition.effective_scope();
        if scope != Scope::Singleton {
            statements.push(Code::of("definition.setScope($S)", [CodeArg::string(scope.as_str())]));
        }
        if definition.primary {
            statements.push(Code::text("definition.setPrimary(true)"));
        }
        if definition.lazy_init {
            statements.push(Code::text("definition.setLazyInit(true)"));
        }
        if definition.role != Role::Application {
            statements.push(Code::of("definition.setRole($T.$N)", [CodeArg::ty(names::BEAN_DEFINITION), CodeArg::name(definition.role.constant_name())]));
        }
        if let Some(init) = &definition.init_method {
            statements.push(Code::of("definition.setInitMethodNames($S)", [CodeArg::string(init)]));
        }
        if let Some(destroy) = &definition.destroy_method {
            statements.push(Code::of("definition.setDestroyMethodNames($S)", [CodeArg::string(destroy)]));
        }
        statements
    }
}

impl RegistrationWriter for DefaultRegistrationWriter {
    fn write_registration(&self, context: &mut BootstrapWriterContext, code: &mut CodeBlock) -> GeneratorResult<()> {
        if let Some(problem) = self.problems.first() {
            return Err(GenerationError::writer_failed(&self.name, problem.clone()));
        }
        let creator = self
            .descriptor
            .instance_creator
            .clone()
            .ok_or_else(|| GenerationError::writer_failed(&self.name, "instance creator is not resolved"))?;

        let package = self.target_package(context.package_name());
        debug!(component = %self.name, package = %package, "Writing registration");

        let mut registration = CodeBlock::new();
        self.write_registration_code(context, &package, &creator, &mut registration)?;
        if package == context.package_name() {
            code.add_block(registration);
            return Ok(());
        }

        let class = context.bootstrap_class(&package);
        let method_name = class.allocate_method_name(&format!("register{}", capitalize(self.produced_type.simple_name())));
        class.add_method(
            MethodSpec::new(method_name.clone())
                .with_modifiers([Modifier::Public, Modifier::Static])
                .with_parameter(names::GENERIC_APPLICATION_CONTEXT, "context")
                .with_body(registration),
        );
        let class_type = class.type_name().clone();
        code.add_statement("$T.$N(context)", [CodeArg::ty(class_type), CodeArg::name(method_name)]);
        Ok(())
    }

    fn instance_descriptor(&self) -> &InstanceDescriptor {
        &self.descriptor
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Explicit instance source, else the autowired, sole, arity-matching or no-arg constructor
fn resolve_instance_creator(container: &dyn Container, definition: &ComponentDefinition, bean_type: &TypeName) -> Option<ExecutableRef> {
    if let Some(source) = &definition.instance_source {
        return Some(source.executable().clone());
    }
    let types = container.type_system();
    if !types.contains(bean_type.as_str()) && !definition.constructor_arguments.is_empty() {
        return infer_constructor(container, definition, bean_type);
    }
    let constructors = types.constructors(bean_type);
    let to_ref = |parameters: &[TypeName]| ExecutableRef::constructor(bean_type.clone(), parameters.to_vec());

    let autowired: Vec<_> = constructors.iter().filter(|c| c.has_annotation(names::AUTOWIRED)).collect();
    if let [single] = autowired.as_slice() {
        return Some(to_ref(&single.parameter_types));
    }
    if let [single] = constructors.as_slice() {
        return Some(to_ref(&single.parameter_types));
    }
    if !definition.constructor_arguments.is_empty() {
        let arity = definition.constructor_arguments.len();
        let matching: Vec<_> = constructors.iter().filter(|c| c.parameter_types.len() == arity).collect();
        if let [single] = matching.as_slice() {
            return Some(to_ref(&single.parameter_types));
        }
    }
    constructors.iter().find(|c| c.parameter_types.is_empty()).map(|c| to_ref(&c.parameter_types))
}

/// Constructor for a type without metadata, one parameter per explicit argument
///
/// Argument indexes must be contiguous from zero.
fn infer_constructor(container: &dyn Container, definition: &ComponentDefinition, bean_type: &TypeName) -> Option<ExecutableRef> {
    let parameters = definition
        .constructor_arguments
        .iter()
        .enumerate()
        .map(|(position, (index, value))| (position == *index).then(|| value_type(container, value)))
        .collect::<Option<Vec<_>>>()?;
    Some(ExecutableRef::constructor(bean_type.clone(), parameters))
}

/// Declared type of an explicit value: `String` for literals, the produced type for references
fn value_type(container: &dyn Container, value: &ArgumentValue) -> TypeName {
    match value {
        ArgumentValue::Literal(_) => TypeName::new(STRING),
        ArgumentValue::Reference(component) => container
            .merged_definition(component)
            .ok()
            .and_then(|definition| container.produced_type(&definition))
            .unwrap_or_else(|| TypeName::new(OBJECT)),
    }
}

/// Setter for a property; types without metadata get a setter inferred from the value
fn resolve_setter(container: &dyn Container, target: &TypeName, property: &PropertyValue) -> Option<ExecutableRef> {
    let types = container.type_system();
    if types.contains(target.as_str()) {
        return types.find_setter(target, &property.name);
    }
    Some(ExecutableRef::method(target.clone(), setter_name(&property.name), vec![value_type(container, &property.value)]))
}

/// No-arg lifecycle method; types without metadata are trusted to declare it
fn resolve_lifecycle_method(types: &TypeSystem, target: &TypeName, method: &str) -> Option<ExecutableRef> {
    if types.contains(target.as_str()) {
        return types.find_method(target, method, &[]);
    }
    Some(ExecutableRef::method(target.clone(), method, Vec::new()))
}

/// Literal value converted for the target type
///
/// Fails when the value has no valid Java literal form for `target`.
fn literal_code(types: &TypeSystem, value: &str, target: &TypeName) -> Result<Code, String> {
    let trimmed = value.trim();
    let invalid = || format!("value '{}' is not a valid {} literal", value, target);
    let literal = match target.as_str() {
        "int" | "java.lang.Integer" => trimmed.parse::<i32>().map(|v| v.to_string()).map_err(|_| invalid())?,
        "short" | "java.lang.Short" => trimmed.parse::<i16>().map(|v| format!("(short) {}", v)).map_err(|_| invalid())?,
        "byte" | "java.lang.Byte" => trimmed.parse::<i8>().map(|v| format!("(byte) {}", v)).map_err(|_| invalid())?,
        "long" | "java.lang.Long" => trimmed.parse::<i64>().map(|v| format!("{}L", v)).map_err(|_| invalid())?,
        "double" | "java.lang.Double" => trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| format!("{:?}D", v)).ok_or_else(invalid)?,
        "float" | "java.lang.Float" => trimmed.parse::<f32>().ok().filter(|v| v.is_finite()).map(|v| format!("{:?}F", v)).ok_or_else(invalid)?,
        "boolean" | "java.lang.Boolean" => trimmed.parse::<bool>().map(|v| v.to_string()).map_err(|_| invalid())?,
        "char" | "java.lang.Character" => char_literal(value).ok_or_else(invalid)?,
        STRING | OBJECT | "java.lang.CharSequence" | "java.io.Serializable" => return Ok(Code::of("$S", [CodeArg::string(value)])),
        _ if types.kind(target) == TypeKind::Enum && is_identifier(trimmed) => return Ok(Code::of("$T.$N", [CodeArg::ty(target.clone()), CodeArg::name(trimmed)])),
        _ => return Err(invalid()),
    };
    Ok(Code::text(literal))
}

/// Quoted Java char literal for a single BMP character; control characters use octal escapes
fn char_literal(value: &str) -> Option<String> {
    let mut chars = value.chars();
    let c = chars.next()?;
    if chars.next().is_some() || c.len_utf16() != 1 {
        return None;
    }
    let escaped = match c {
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        c if c.is_control() => format!("\\{:o}", c as u32),
        c => c.to_string(),
    };
    Some(format!("'{}'", escaped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootgen_core::types::{ConstructorInfo, MethodInfo, TypeDescriptor, Visibility};
    use bootgen_core::DefaultContainer;

    fn write(container: DefaultContainer, name: &str) -> GeneratorResult<(String, BootstrapWriterContext)> {
        let container: Arc<dyn Container> = Arc::new(container);
        let definition = container.merged_definition(name)?;
        let supplier = DefaultRegistrationWriterSupplier::with_container(Arc::clone(&container));
        let writer = supplier.get(name, &definition).unwrap();
        let mut context = BootstrapWriterContext::new("com.example", "ContextBootstrapInitializer");
        let mut code = CodeBlock::new();
        writer.write_registration(&mut context, &mut code)?;
        Ok((code.to_string(), context))
    }

    #[test]
    fn test_simple_constructor() {
        let container = DefaultContainer::new().with_component("simple", ComponentDefinition::of_type("com.example.Simple"));
        let (code, context) = write(container, "simple").unwrap();
        assert_eq!(code, "context.registerBean(\"simple\", com.example.Simple.class, () -> new com.example.Simple());\n");
        assert!(context.registry().reflection().is_empty());
    }

    #[test]
    fn test_autowired_constructor_arguments() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.Service").with_constructor(
                ConstructorInfo::new(vec![TypeName::new("com.example.Repository"), TypeName::new("org.springframework.core.env.Environment")]).annotated_with(names::AUTOWIRED),
            ))
            .with_type(TypeDescriptor::class("com.example.Repository"))
            .with_component("repository", ComponentDefinition::of_type("com.example.Repository"))
            .with_component("service", ComponentDefinition::of_type("com.example.Service"));

        let (code, _) = write(container, "service").unwrap();
        assert!(code.contains("new com.example.Service(context.getBean(\"repository\", com.example.Repository.class), context.getEnvironment())"));
    }

    #[test]
    fn test_properties_and_customizer() {
        let container = DefaultContainer::new()
            .with_type(
                TypeDescriptor::class("com.example.Pool")
                    .with_method(MethodInfo::new("setSize", vec![TypeName::new("int")]))
                    .with_method(MethodInfo::new("setName", vec![TypeName::new(STRING)]))
                    .with_method(MethodInfo::new("close", vec![])),
            )
            .with_component(
                "pool",
                ComponentDefinition::of_type("com.example.Pool")
                    .with_property(PropertyValue::literal("size", "4"))
                    .with_property(PropertyValue::literal("name", "main"))
                    .with_scope(Scope::Prototype)
                    .with_role(Role::Infrastructure)
                    .with_destroy_method("close"),
            );

        let (code, _) = write(container, "pool").unwrap();
        assert_eq!(
            code,
            "context.registerBean(\"pool\", com.example.Pool.class, () -> {\n  com.example.Pool bean = new com.example.Pool();\n  bean.setSize(4);\n  bean.setName(\"main\");\n  return bean;\n}, (definition) -> {\n  definition.setScope(\"prototype\");\n  definition.setRole(org.springframework.beans.factory.config.BeanDefinition.ROLE_INFRASTRUCTURE);\n  definition.setDestroyMethodNames(\"close\");\n});\n"
        );
    }

    #[test]
    fn test_missing_setter_fails() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.Pool"))
            .with_component("pool", ComponentDefinition::of_type("com.example.Pool").with_property(PropertyValue::literal("size", "4")));

        let error = write(container, "pool").err().unwrap();
        assert!(matches!(error, GenerationError::WriterFailed { ref name, .. } if name == "pool"));
    }

    #[test]
    fn test_private_constructor_uses_reflection() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.Hidden").with_constructor(ConstructorInfo::new(vec![]).with_visibility(Visibility::Private)))
            .with_component("hidden", ComponentDefinition::of_type("com.example.Hidden"));

        let (code, context) = write(container, "hidden").unwrap();
        assert!(code.contains("org.springframework.beans.BeanUtils.instantiateClass(org.springframework.util.ReflectionUtils.accessibleConstructor(com.example.Hidden.class))"));
        let entry = context.registry().reflection().get("com.example.Hidden").unwrap();
        assert!(entry.methods().contains(&ExecutableRef::default_constructor("com.example.Hidden")));
    }

    #[test]
    fn test_package_private_type_in_other_package() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.internal.Secret").with_visibility(Visibility::Package))
            .with_component("secret", ComponentDefinition::of_type("com.example.internal.Secret"));

        let (code, context) = write(container, "secret").unwrap();
        assert_eq!(code, "com.example.internal.ContextBootstrapInitializer.registerSecret(context);\n");
        let files = context.to_source_files();
        assert_eq!(files.len(), 2);
        assert!(files[1].content.contains("public static void registerSecret(GenericApplicationContext context) {"));
        assert!(files[1].content.contains("context.registerBean(\"secret\", Secret.class, () -> new Secret());"));
    }

    #[test]
    fn test_factory_methods() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.Config").with_method(MethodInfo::new("dataSource", vec![]).returning("com.example.DataSource")))
            .with_type(TypeDescriptor::class("com.example.Clock").with_method(MethodInfo::new("system", vec![]).returning("com.example.Clock").as_static()))
            .with_component("config", ComponentDefinition::of_type("com.example.Config"))
            .with_component(
                "dataSource",
                ComponentDefinition::of_type("com.example.Config").with_instance_source(InstanceSource::FactoryMethod {
                    factory_component: "config".to_string(),
                    method: ExecutableRef::method("com.example.Config", "dataSource", vec![]),
                }),
            )
            .with_component(
                "clock",
                ComponentDefinition::of_type("com.example.Clock").with_instance_source(InstanceSource::StaticFactoryMethod(ExecutableRef::method("com.example.Clock", "system", vec![]))),
            );

        let container: Arc<dyn Container> = Arc::new(container);
        let supplier = DefaultRegistrationWriterSupplier::with_container(Arc::clone(&container));
        let mut context = BootstrapWriterContext::new("com.example", "ContextBootstrapInitializer");
        let mut code = CodeBlock::new();
        for name in ["dataSource", "clock"] {
            let definition = container.merged_definition(name).unwrap();
            supplier.get(name, &definition).unwrap().write_registration(&mut context, &mut code).unwrap();
        }
        let code = code.to_string();
        assert!(code.contains("context.registerBean(\"dataSource\", com.example.DataSource.class, () -> context.getBean(\"config\", com.example.Config.class).dataSource());"));
        assert!(code.contains("context.registerBean(\"clock\", com.example.Clock.class, () -> com.example.Clock.system());"));
    }

    #[test]
    fn test_literal_conversion() {
        let types = TypeSystem::new().with_type(TypeDescriptor::enumeration("com.example.Mode"));
        let convert = |value: &str, target: &str| literal_code(&types, value, &TypeName::new(target)).map(|code| code.to_string());
        assert_eq!(convert("42", "long").unwrap(), "42L");
        assert_eq!(convert(" 7 ", "int").unwrap(), "7");
        assert_eq!(convert("5", "java.lang.Short").unwrap(), "(short) 5");
        assert_eq!(convert("1e3", "double").unwrap(), "1000.0D");
        assert_eq!(convert("true", "boolean").unwrap(), "true");
        assert_eq!(convert("\\", "char").unwrap(), "'\\\\'");
        assert_eq!(convert("\u{7}", "char").unwrap(), "'\\7'");
        assert_eq!(convert("FAST", "com.example.Mode").unwrap(), "com.example.Mode.FAST");
        assert_eq!(convert("hi", STRING).unwrap(), "\"hi\"");
    }

    #[test]
    fn test_unconvertible_literals_are_rejected() {
        let types = TypeSystem::new().with_type(TypeDescriptor::enumeration("com.example.Mode"));
        for (value, target) in [("x", "int"), ("2147483648", "int"), ("128", "byte"), ("NaN", "double"), ("1e40", "float"), ("", "char"), ("\u{1F600}", "char"), ("not valid", "com.example.Mode"), ("x", "com.example.Other")] {
            assert!(literal_code(&types, value, &TypeName::new(target)).is_err(), "{} <- {:?}", target, value);
        }
    }

    #[test]
    fn test_invalid_literal_fails_writer() {
        let container = DefaultContainer::new()
            .with_type(TypeDescriptor::class("com.example.Pool").with_method(MethodInfo::new("setSize", vec![TypeName::new("int")])))
            .with_component("pool", ComponentDefinition::of_type("com.example.Pool").with_property(PropertyValue::literal("size", "x")));

        let error = write(container, "pool").err().unwrap();
        assert!(matches!(error, GenerationError::WriterFailed { ref name, ref reason } if name == "pool" && reason.contains("size")));
    }

    #[test]
    fn test_unregistered_type_infers_constructor() {
        let container = DefaultContainer::new()
            .with_component("repository", ComponentDefinition::of_type("com.example.Repository"))
            .with_component(
                "client",
                ComponentDefinition::of_type("com.example.Client")
                    .with_constructor_argument(0, ArgumentValue::Reference("repository".to_string()))
                    .with_constructor_argument(1, ArgumentValue::Literal("30".to_string())),
            );

        let (code, _) = write(container, "client").unwrap();
        assert!(code.contains("new com.example.Client(context.getBean(\"repository\", com.example.Repository.class), \"30\")"));
    }

    #[test]
    fn test_requires_container() {
        let supplier = DefaultRegistrationWriterSupplier::new();
        assert!(supplier.get("a", &ComponentDefinition::of_type("a.A")).is_none());
    }
}
