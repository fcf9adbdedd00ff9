use crate::domain::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a new status if the lifecycle allows it.
    Transition(OrderStatus),
}
