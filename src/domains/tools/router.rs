//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only chains them.

use rmcp::handler::server::tool::ToolRouter;

use crate::core::RandomSource;

use super::definitions::{
    CreditCardTool, Ean13Tool, IbanTool, ImoTool, IsbnTool, MmsiTool, ToolDefinition, UuidTool,
};

/// Build the tool router with all registered tools sharing `random`.
pub fn build_tool_router<S>(random: RandomSource) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreditCardTool::create_route(random.clone()))
        .with_route(IsbnTool::create_route(random.clone()))
        .with_route(Ean13Tool::create_route(random.clone()))
        .with_route(ImoTool::create_route(random.clone()))
        .with_route(IbanTool::create_route(random.clone()))
        .with_route(MmsiTool::create_route(random.clone()))
        .with_route(UuidTool::create_route(random))
}
