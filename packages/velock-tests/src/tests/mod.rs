mod integration_dividends;
mod integration_voting_escrow;
