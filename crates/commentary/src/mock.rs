// In crates/commentary/src/mock.rs

use crate::types::{Commentary, CommentaryContext, Sentiment};
use crate::{CommentaryProvider, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Deterministic stand-in for an LLM-backed analyst.
///
/// Renders a fixed template over the signal context after a simulated
/// round-trip delay, the way the original returned canned analysis text.
/// Breadth decides the tone: when more of the watchlist is showing sell
/// signals (strong risers) than buy signals (sharp fallers), the mock
/// reads the tape as bullish, and vice versa.
pub struct MockAnalyst {
    delay: Duration,
}

impl MockAnalyst {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No simulated delay; used by tests and the one-shot CLI path.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    fn sentiment_for(context: &CommentaryContext) -> Sentiment {
        if context.sell_count > context.buy_count {
            Sentiment::Bullish
        } else if context.buy_count > context.sell_count {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        }
    }

    fn confidence_for(context: &CommentaryContext) -> f64 {
        if context.total_instruments == 0 {
            return 0.5;
        }
        let skew = context.buy_count.abs_diff(context.sell_count) as f64
            / context.total_instruments as f64;
        // A lopsided tape reads as a clearer picture, up to a cap.
        (0.5 + 0.4 * skew).min(0.9)
    }

    fn render(context: &CommentaryContext, sentiment: Sentiment) -> String {
        if context.total_instruments == 0 {
            return format!(
                "No instruments were available for {} over the past {}, so there is \
                 nothing to read into the current signal set. Refresh once market data \
                 is available.",
                context.index_name,
                context.timeframe.describe()
            );
        }

        let total = context.total_instruments as f64;
        let buy_share = context.buy_count as f64 / total * 100.0;
        let sell_share = context.sell_count as f64 / total * 100.0;

        let tone = match sentiment {
            Sentiment::Bullish => {
                "Breadth favors the upside: strong risers outnumber sharp fallers, which \
                 in a mean-reversion framework argues for patience on new entries and \
                 taking profits into strength."
            }
            Sentiment::Bearish => {
                "Breadth is tilted to the downside: sharp fallers outnumber strong \
                 risers, which suggests the market is offering oversold entries but also \
                 warns against catching every falling knife at once."
            }
            Sentiment::Neutral => {
                "Signals are balanced on both sides, so the tape offers no clear edge; \
                 follow the individual setups rather than a broad directional view."
            }
        };

        let mut analysis = format!(
            "Across {} constituents of {} over the past {}, {} ({:.1}%) are showing buy \
             signals and {} ({:.1}%) are showing sell signals. {}",
            context.total_instruments,
            context.index_name,
            context.timeframe.describe(),
            context.buy_count,
            buy_share,
            context.sell_count,
            sell_share,
            tone,
        );

        if !context.top_buys.is_empty() {
            analysis.push_str(&format!(
                " Leading buy candidates: {}.",
                context.top_buys.join(", ")
            ));
        }
        if !context.top_sells.is_empty() {
            analysis.push_str(&format!(
                " Leading sell candidates: {}.",
                context.top_sells.join(", ")
            ));
        }
        analysis.push_str(
            " Size positions with clearly defined stop-loss levels and make sure each \
             trade fits within your broader portfolio strategy and risk tolerance. \
             Analysis is for informational purposes only.",
        );
        analysis
    }
}

#[async_trait]
impl CommentaryProvider for MockAnalyst {
    fn name(&self) -> &'static str {
        "MockAnalyst"
    }

    async fn generate_commentary(&self, context: &CommentaryContext) -> Result<Commentary> {
        sleep(self.delay).await;
        let sentiment = Self::sentiment_for(context);
        tracing::debug!(
            index = %context.index_name,
            buys = context.buy_count,
            sells = context.sell_count,
            ?sentiment,
            "rendering mock commentary"
        );
        Ok(Commentary {
            analysis: Self::render(context, sentiment),
            sentiment,
            confidence: Self::confidence_for(context),
        })
    }
}
