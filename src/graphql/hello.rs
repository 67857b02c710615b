use std::time::Duration;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

pub type HelloSchema = Schema<HelloRoot, EmptyMutation, EmptySubscription>;

/// Value every hello field resolves to.
pub const MESSAGE: &str = "Message Delivered";

/// How long each hello field sleeps before answering.
#[derive(Debug, Clone, Copy)]
pub struct MessageDelay(pub Duration);

pub fn build_hello_schema(delay: Duration) -> HelloSchema {
    Schema::build(HelloRoot, EmptyMutation, EmptySubscription)
        .data(MessageDelay(delay))
        .finish()
}

async fn deliver(ctx: &Context<'_>) -> async_graphql::Result<String> {
    let MessageDelay(delay) = *ctx.data::<MessageDelay>()?;
    tokio::time::sleep(delay).await;
    Ok(MESSAGE.to_string())
}

pub struct HelloRoot;

#[Object(name = "HelloWorld")]
impl HelloRoot {
    async fn message(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        deliver(ctx).await
    }

    async fn message1(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        deliver(ctx).await
    }

    async fn message2(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        deliver(ctx).await
    }

    async fn message3(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        deliver(ctx).await
    }
}
