// src/models.rs

pub mod auth;
pub mod lookup;
pub mod material;
pub mod party;
pub mod resource;
pub mod user;

pub use auth::{LoginPayload, LoginResponse, RegisterPayload, Role};
pub use lookup::{ItemTypes, Lookup, LookupCreate, LookupUpdate, MaterialTypes, UnitMeasures};
pub use material::{Material, MaterialCreate, MaterialUpdate, Materials};
pub use party::{
    Customer, CustomerCreate, CustomerUpdate, Customers, Supplier, SupplierCreate, SupplierUpdate,
    Suppliers, CUSTOMER_TYPES,
};
pub use resource::{Labels, Record, Resource};
pub use user::{PasswordChange, User, UserCreate, UserUpdate, Users};
