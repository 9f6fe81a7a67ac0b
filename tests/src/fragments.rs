mod inputs;
mod ordering;
