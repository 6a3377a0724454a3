use controller::{Entity, Rating};
use std::fmt::{self, Display};

/// How a recommendation was reached
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy<UserId> {
    /// Highest average rating overall, for users without history
    ColdStart { average: f64 },

    /// Best unwatched item of the most similar reviewer
    WarmStart {
        reviewer: UserId,
        similarity: u32,
        rating: Rating,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a, Item, UserId> {
    pub item: &'a Item,
    pub strategy: Strategy<UserId>,
}

impl<'a, Item, UserId> Recommendation<'a, Item, UserId>
where
    Item: Entity,
{
    pub fn title(&self) -> &'a str {
        self.item.get_name()
    }
}

impl<UserId: Display> Display for Strategy<UserId> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::ColdStart { average } => {
                write!(f, "cold start, average rating {:.2}", average)
            }
            Strategy::WarmStart {
                reviewer,
                similarity,
                rating,
            } => write!(
                f,
                "warm start, reviewer id({}) with similarity {} rated it {}",
                reviewer, similarity, rating
            ),
        }
    }
}
