//! Model for the classic sea battle game.
//!
//! A [`Board`][board::Board] holds one player's fleet of straight [`Vessel`][ships::Vessel]s
//! and resolves shots against it. Fleets are placed at random by
//! [`random_board`][board::setup::random_board], keeping a one-cell dead zone around every
//! vessel, and a board can be rendered as a bordered text grid either as its owner sees
//! it or as the opponent does.
//!
//! [`game`] pairs two boards into a human-versus-computer match with turn tracking.

pub mod board;
pub mod game;
pub mod ships;
