mod floats;
