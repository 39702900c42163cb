mod contact;
mod health;
