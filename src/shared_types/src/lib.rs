//! Generated TypeScript bindings for the gate-ui core live in `generated/`.
