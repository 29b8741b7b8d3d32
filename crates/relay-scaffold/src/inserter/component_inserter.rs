use crate::config::SchemaLoader;
use crate::host::EditorHost;
use crate::host::QuickPickOptions;
use crate::host::TextEditor;
use crate::inserter::AbortReason;
use crate::inserter::ComponentKind;
use crate::inserter::InsertError;
use crate::inserter::InsertOutcome;
use crate::inserter::module_name_prompt::valid_module_name;
use crate::schema::Field;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::template;
use crate::template::QueryComponentShape;
use crate::template::TemplateError;
use crate::template::naming;

type Result<T> = std::result::Result<T, InsertError>;

/// What a variant handler produces: the text to insert, or the reason it
/// stopped short.
type HandlerResult = std::result::Result<GeneratedInsert, AbortReason>;

const BOILERPLATE_PLACE_HOLDER: &str =
    "Do you also want to add boilerplate for a component?";
const QUERY_SHAPE_PLACE_HOLDER: &str = "What type of query are you making?";

const CARET_LINES_UP: usize = 3;

#[derive(Debug)]
struct GeneratedInsert {
    module_name: String,
    text: String,
}

/// Names the user typed or the file name carries can make a document that
/// doesn't parse as GraphQL. It is still inserted for the user to fix up.
fn unvalidated_document(generated: std::result::Result<String, TemplateError>) -> String {
    match generated {
        Ok(document) => document,
        Err(TemplateError::InvalidDocument { document, err }) => {
            log::warn!("Inserting a document that is not valid GraphQL ({err}).");
            document
        },
    }
}

/// Per-invocation state shared by the variant handlers.
struct InsertContext<'a, H: EditorHost> {
    doc_text: String,
    file_module_name: String,
    host: &'a H,
    schema: Option<Schema>,
}
impl<H: EditorHost> InsertContext<'_, H> {
    async fn pick_from_schema(&self, kind: ComponentKind) -> Option<String> {
        let items = self.schema.as_ref()
            .map(|schema| kind.selectable_items(schema))
            .unwrap_or_default();
        log::trace!("Offering {} {kind} candidates.", items.len());

        self.host.show_quick_pick(
            items,
            QuickPickOptions::with_place_holder(kind.quick_pick_place_holder()),
        ).await
    }

    async fn pick_one_of(&self, items: &[&str], place_holder: &str) -> Option<String> {
        self.host.show_quick_pick(
            items.iter().map(|item| item.to_string()).collect(),
            QuickPickOptions::with_place_holder(place_holder),
        ).await
    }

    /// Anything but an explicit "Yes" (including dismissing the prompt)
    /// means no boilerplate.
    async fn wants_component_boilerplate(&self) -> bool {
        self.pick_one_of(&["Yes", "No"], BOILERPLATE_PLACE_HOLDER).await.as_deref()
            == Some("Yes")
    }

    fn resolve_root_field(
        &self,
        operation_kind: OperationKind,
        field_name: &str,
    ) -> Option<Field> {
        self.schema.as_ref()?
            .root_operation_type(operation_kind)?
            .field(field_name)
            .cloned()
    }

    async fn module_name(&self, default_name: &str) -> String {
        valid_module_name(self.host, self.doc_text.as_str(), default_name).await
    }
}

/// Runs the scaffolding workflow for `kind` against the host's active
/// editor.
///
/// Prompts for a schema element, generates the module text, inserts it at
/// the caret, moves the caret three lines up and saves. Returns
/// [`InsertOutcome::Aborted`] without touching the document when there is no
/// active editor, the user dismisses a selection, or the selection can't be
/// resolved in the schema. Only a missing editor is reported to the user.
pub async fn insert_graphql_component<H, L>(
    host: &H,
    schema_loader: &L,
    kind: ComponentKind,
) -> Result<InsertOutcome>
where
    H: EditorHost,
    L: SchemaLoader,
{
    let Some(mut editor) = host.active_text_editor() else {
        host.show_error_message("Missing active text editor.").await;
        return Ok(InsertOutcome::Aborted(AbortReason::NoActiveEditor));
    };

    let ctx = InsertContext {
        doc_text: editor.text(),
        file_module_name: naming::file_module_name(editor.file_name().as_str()),
        host,
        schema: schema_loader.load_schema().await?,
    };

    let generated = match kind {
        ComponentKind::Fragment => insert_fragment(&ctx).await,
        ComponentKind::Mutation => insert_mutation(&ctx).await,
        ComponentKind::Query => insert_query(&ctx).await,
        ComponentKind::Subscription => insert_subscription(&ctx).await,
    };
    let generated = match generated {
        Ok(generated) => generated,
        Err(reason) => {
            log::debug!("{kind} insertion aborted: {reason:?}.");
            return Ok(InsertOutcome::Aborted(reason));
        },
    };

    editor.insert_at_caret(generated.text.as_str()).await?;
    let caret = editor.caret().lines_up(CARET_LINES_UP);
    editor.set_caret(caret);
    editor.save().await?;

    log::debug!("Inserted {kind} module `{}`.", generated.module_name);
    Ok(InsertOutcome::Inserted {
        caret,
        module_name: generated.module_name,
        text: generated.text,
    })
}

async fn insert_fragment<H: EditorHost>(ctx: &InsertContext<'_, H>) -> HandlerResult {
    let Some(on_type) = ctx.pick_from_schema(ComponentKind::Fragment).await else {
        return Err(AbortReason::Cancelled);
    };

    let Some(schema) = ctx.schema.as_ref() else {
        return Err(AbortReason::UnresolvedSchemaElement);
    };
    let resolves = schema.get_type(on_type.as_str()).is_some_and(|named_type| {
        named_type.kind().is_composite() && !named_type.is_introspection_type()
    });
    if !resolves {
        return Err(AbortReason::UnresolvedSchemaElement);
    }

    let module_name = ctx.module_name(
        naming::default_fragment_module_name(on_type.as_str()).as_str(),
    ).await;
    let document = unvalidated_document(template::make_fragment(
        schema,
        naming::fragment_name(ctx.file_module_name.as_str(), module_name.as_str()).as_str(),
        on_type.as_str(),
    ));

    let mut text = template::fragment_module(module_name.as_str(), document.as_str());
    if ctx.wants_component_boilerplate().await {
        text.push_str(
            template::fragment_component(module_name.as_str(), on_type.as_str()).as_str(),
        );
    }

    Ok(GeneratedInsert { module_name, text })
}

async fn insert_query<H: EditorHost>(ctx: &InsertContext<'_, H>) -> HandlerResult {
    let Some(field_name) = ctx.pick_from_schema(ComponentKind::Query).await else {
        return Err(AbortReason::Cancelled);
    };
    let Some(field) = ctx.resolve_root_field(OperationKind::Query, field_name.as_str()) else {
        return Err(AbortReason::UnresolvedSchemaElement);
    };
    let Some(schema) = ctx.schema.as_ref() else {
        return Err(AbortReason::UnresolvedSchemaElement);
    };

    let module_name = ctx.module_name(naming::DEFAULT_QUERY_MODULE_NAME).await;
    let document = unvalidated_document(template::make_operation(
        schema,
        OperationKind::Query,
        naming::query_operation_name(
            ctx.file_module_name.as_str(),
            module_name.as_str(),
        ).as_str(),
        &field,
    ));

    let mut text = template::operation_module(module_name.as_str(), document.as_str());
    if ctx.wants_component_boilerplate().await {
        let shape =
            match ctx.pick_one_of(&["Preloaded", "Lazy"], QUERY_SHAPE_PLACE_HOLDER).await.as_deref() {
                Some("Preloaded") => QueryComponentShape::Preloaded,
                _ => QueryComponentShape::Lazy,
            };
        text.push_str(template::query_component(module_name.as_str(), shape).as_str());
    }

    Ok(GeneratedInsert { module_name, text })
}

async fn insert_mutation<H: EditorHost>(ctx: &InsertContext<'_, H>) -> HandlerResult {
    let Some(field_name) = ctx.pick_from_schema(ComponentKind::Mutation).await else {
        return Err(AbortReason::Cancelled);
    };
    let Some(field) = ctx.resolve_root_field(OperationKind::Mutation, field_name.as_str()) else {
        return Err(AbortReason::UnresolvedSchemaElement);
    };
    let Some(schema) = ctx.schema.as_ref() else {
        return Err(AbortReason::UnresolvedSchemaElement);
    };

    let module_name = ctx.module_name(
        naming::default_mutation_module_name(field_name.as_str()).as_str(),
    ).await;
    let document = unvalidated_document(template::make_operation(
        schema,
        OperationKind::Mutation,
        naming::mutation_operation_name(
            ctx.file_module_name.as_str(),
            field_name.as_str(),
        ).as_str(),
        &field,
    ));

    let mut text = template::operation_module(module_name.as_str(), document.as_str());
    if ctx.wants_component_boilerplate().await {
        text.push_str(template::mutation_component(module_name.as_str()).as_str());
    }

    Ok(GeneratedInsert { module_name, text })
}

async fn insert_subscription<H: EditorHost>(ctx: &InsertContext<'_, H>) -> HandlerResult {
    let Some(field_name) = ctx.pick_from_schema(ComponentKind::Subscription).await else {
        return Err(AbortReason::Cancelled);
    };
    let Some(field) = ctx.resolve_root_field(OperationKind::Subscription, field_name.as_str()) else {
        return Err(AbortReason::UnresolvedSchemaElement);
    };
    let Some(schema) = ctx.schema.as_ref() else {
        return Err(AbortReason::UnresolvedSchemaElement);
    };

    let module_name = ctx.module_name(naming::DEFAULT_SUBSCRIPTION_MODULE_NAME).await;
    let document = unvalidated_document(template::make_operation(
        schema,
        OperationKind::Subscription,
        naming::subscription_operation_name(
            ctx.file_module_name.as_str(),
            field_name.as_str(),
        ).as_str(),
        &field,
    ));

    let mut text = template::operation_module(module_name.as_str(), document.as_str());
    if ctx.wants_component_boilerplate().await {
        text.push_str(template::subscription_component(module_name.as_str()).as_str());
    }

    Ok(GeneratedInsert { module_name, text })
}
