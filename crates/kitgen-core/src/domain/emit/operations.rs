//! The five canonical operations.
//!
//! Contracts, the service implementation, the repository stub and the
//! transport layer all iterate [`Operation::ALL`], so their method sets
//! cannot drift apart.

use std::fmt;

/// List, Get, Create, Update, Delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub const fn verb(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Get => "Get",
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }

    /// `ListOrders`, `GetOrder`, ...
    pub fn method(self, model: &str) -> String {
        match self {
            Self::List => format!("List{model}s"),
            _ => format!("{}{model}", self.verb()),
        }
    }

    /// `ListOrdersRequest`, `GetOrderRequest`, ...
    pub fn request_type(self, model: &str) -> String {
        format!("{}Request", self.method(model))
    }

    /// `MakeListOrdersEndpoint`, ...
    pub fn endpoint_constructor(self, model: &str) -> String {
        format!("Make{}Endpoint", self.method(model))
    }

    /// `CreateOrderParams` for the write operations.
    pub fn params_type(self, model: &str) -> Option<String> {
        match self {
            Self::Create | Self::Update => Some(format!("{}{model}Params", self.verb())),
            _ => None,
        }
    }

    /// Name of the single argument, if any.
    pub const fn argument(self) -> Option<&'static str> {
        match self {
            Self::List => None,
            Self::Get | Self::Delete => Some("id"),
            Self::Create | Self::Update => Some("params"),
        }
    }

    /// Full Go method signature.
    ///
    /// `domain` is the qualifier for the params types: empty inside package
    /// `domain`, `"domain."` everywhere else. Results always reference
    /// `entity.<Model>`.
    pub fn signature(self, model: &str, domain: &str) -> String {
        let method = self.method(model);
        match self {
            Self::List => format!("{method}() ([]entity.{model}, error)"),
            Self::Get => format!("{method}(id string) (entity.{model}, error)"),
            Self::Create | Self::Update => {
                let params = self.params_type(model).unwrap_or_default();
                format!("{method}(params {domain}{params}) (entity.{model}, error)")
            }
            Self::Delete => format!("{method}(id string) error"),
        }
    }

    /// `ListOrders()`, `GetOrder(id)`, ... for forwarding calls.
    pub fn call(self, model: &str) -> String {
        format!("{}({})", self.method(model), self.argument().unwrap_or(""))
    }

    /// Zero value returned alongside an error, or `None` for Delete.
    pub fn zero_result(self, model: &str) -> Option<String> {
        match self {
            Self::List => Some("nil".into()),
            Self::Get | Self::Create | Self::Update => Some(format!("entity.{model}{{}}")),
            Self::Delete => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
